//! Error types.
//!
//! None of these reach the page user. Behavior cores log and degrade; the
//! boot sequence logs and skips the affected unit.

/// Failure talking to the key-value store backing the theme preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or not exposed (private mode, sandboxed iframe).
    #[error("storage unavailable")]
    Unavailable,
    /// The store threw on read or write (quota, security policy).
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Failure while booting the page behaviors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("failed to bind {0}")]
    Bind(String),
}
