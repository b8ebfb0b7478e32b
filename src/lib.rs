//! Client-side behavior layer for a static personal site.
//!
//! Compiled to WebAssembly with the `hydrate` feature and loaded by the page.
//! Each unit is a small core written against traits, so the behavior runs
//! and is tested natively; [`dom`] implements those traits for `web_sys`
//! types and wires everything up at startup.
//!
//! ## Page contract
//!
//! The markup hooks are `data-theme-option`, `.fade-in`,
//! `.nav-links a[href^="#"]`, `#ask-form`, `#ask-input`, `#ask-response` and
//! `.hp-field`. The theme is stored under `sc_theme_preference`.
//!
//! Extension: a page may also embed a `<script type="application/json"
//! id="site-config">` to override the defaults in [`config::SiteConfig`].
//! Pages without it behave exactly as the defaults describe.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Persisted pink/cream/dark theme and selector state |
//! | [`reveal`] | One-shot fade-in reveal tracking |
//! | [`scroll`] | Smooth scrolling for in-page nav links |
//! | [`ask`] | Ask-a-question box with honeypot guard and auto-hide |
//! | [`site`] | Service object shared by all handlers |
//! | [`config`] | Tunables with defaults and optional JSON override |
//! | [`storage`] | Key-value store abstraction and `localStorage` backend |
//! | [`error`] | Error types |
//! | [`consts`] | DOM contract names and default numbers |
//! | `dom` | Browser bindings and `start` (hydrate only) |

pub mod ask;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod site;
pub mod storage;
pub mod theme;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("pagekit: console logger not installed: {e}").into());
    }

    if let Err(e) = dom::boot() {
        log::warn!("page behaviors disabled: {e}");
    }
}
