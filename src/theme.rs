//! Theme selection: pink, cream or dark.
//!
//! Reads the persisted preference at startup, applies it as a `data-theme`
//! attribute on `<html>`, and keeps the selector buttons' active/pressed
//! state in step with it. Requires a browser environment only through the
//! [`ThemeRoot`] and [`ThemeControl`] implementations in `dom`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot be read behaves like an
//! empty one; a store that rejects writes leaves the theme applied for the
//! current page only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Pink,
    #[default]
    Cream,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Pink, Theme::Cream, Theme::Dark];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Pink => "pink",
            Theme::Cream => "cream",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

/// Exact, case-sensitive match on the theme name.
impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

/// Map any candidate onto a theme. Missing, empty and unknown values are
/// [`Theme::Cream`].
#[must_use]
pub fn normalize(candidate: Option<&str>) -> Theme {
    candidate.map_or(Theme::default(), |raw| raw.parse().unwrap_or_default())
}

/// Document-level theme state (`<html data-theme>`).
pub trait ThemeRoot {
    fn set_theme(&self, theme: Theme);
}

/// A selector button carrying a `data-theme-option` value.
pub trait ThemeControl {
    /// Raw option value, if the attribute is present.
    fn option(&self) -> Option<String>;
    /// Set both the `active` class and `aria-pressed`.
    fn set_active(&self, active: bool);
}

/// Apply `theme` to the document and mark the matching control(s) active.
///
/// Every control is written, so a control whose option is missing or invalid
/// always ends up inactive.
pub fn apply<R, C>(root: &R, controls: &[C], theme: Theme)
where
    R: ThemeRoot + ?Sized,
    C: ThemeControl,
{
    root.set_theme(theme);
    for control in controls {
        let active = control.option().as_deref() == Some(theme.as_str());
        control.set_active(active);
    }
}

/// Persisted theme preference.
pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Resolve the theme to show at startup.
    pub fn load(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(stored) => normalize(stored.as_deref()),
            Err(e) => {
                log::debug!("theme preference unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    /// Read the stored preference and apply it.
    pub fn restore<R, C>(&self, root: &R, controls: &[C]) -> Theme
    where
        R: ThemeRoot + ?Sized,
        C: ThemeControl,
    {
        let theme = self.load();
        apply(root, controls, theme);
        theme
    }

    /// Handle a click on a selector: apply first, then persist the
    /// normalized name. Write failures are logged and dropped.
    pub fn select<R, C>(&self, root: &R, controls: &[C], candidate: Option<&str>) -> Theme
    where
        R: ThemeRoot + ?Sized,
        C: ThemeControl,
    {
        let theme = normalize(candidate);
        apply(root, controls, theme);
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::debug!("theme preference not persisted: {e}");
        }
        theme
    }
}
