//! Page tunables.
//!
//! Defaults reproduce the shipped site and are all a page needs. As an
//! extension to the page contract, JSON embedded in an element with id
//! `site-config` may override any subset; unknown keys are ignored and
//! missing keys keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ASK_HIDE_DELAY_MS, ASK_RESPONSE_TEXT, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, THEME_STORAGE_KEY,
};
use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub storage_key: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub ask_response_text: String,
    pub ask_hide_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            ask_response_text: ASK_RESPONSE_TEXT.to_owned(),
            ask_hide_delay_ms: ASK_HIDE_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the JSON is malformed or a value is
    /// out of range.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config embedded in the page, if any. Invalid overrides are
    /// logged and replaced by the defaults as a whole.
    #[must_use]
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring site config: {e}");
                Self::default()
            }
        }
    }

    /// Reject values the browser would refuse or that break the page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::Config("storageKey must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::Config(format!(
                "revealThreshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        Ok(())
    }
}
