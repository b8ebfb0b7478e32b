//! Shared names and defaults for the page contract.
//!
//! The markup, stylesheet and this crate agree on these strings. Changing one
//! here means changing the HTML/CSS too.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the last selected theme.
pub const THEME_STORAGE_KEY: &str = "sc_theme_preference";

/// Attribute set on `<html>` for stylesheet hooks.
pub const THEME_ROOT_ATTR: &str = "data-theme";

/// Attribute marking a theme selector button; its value names the theme.
pub const THEME_OPTION_ATTR: &str = "data-theme-option";

pub const THEME_OPTION_SELECTOR: &str = "[data-theme-option]";

/// Class toggled on the selector matching the resolved theme.
pub const ACTIVE_CLASS: &str = "active";

pub const ARIA_PRESSED_ATTR: &str = "aria-pressed";

// ── Reveal ──────────────────────────────────────────────────────

pub const FADE_IN_SELECTOR: &str = ".fade-in";

/// Class added once an element has been revealed. Shared with the ask box.
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of the element's area that must be on screen.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Trigger 40px before the element reaches the viewport's bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// ── Smooth scroll ───────────────────────────────────────────────

pub const NAV_LINK_SELECTOR: &str = ".nav-links a[href^=\"#\"]";

// ── Ask box ─────────────────────────────────────────────────────

pub const ASK_FORM_ID: &str = "ask-form";
pub const ASK_INPUT_ID: &str = "ask-input";
pub const ASK_RESPONSE_ID: &str = "ask-response";
pub const HONEYPOT_SELECTOR: &str = ".hp-field";

pub const ASK_RESPONSE_TEXT: &str = "Thanks for your question. This feature is coming soon and will answer questions about Shreya's experience and projects.";

/// How long the acknowledgment stays visible.
pub const ASK_HIDE_DELAY_MS: u32 = 6000;

// ── Config ──────────────────────────────────────────────────────

/// Optional `<script type="application/json">` carrying a `SiteConfig`.
/// Extension; the shipped markup does not include it.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
