//! Page-wide service object.
//!
//! Built once at startup from the resolved [`SiteConfig`] and a store, then
//! shared (behind `Rc`) with every event handler. Holds no per-event state.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::rc::Rc;

use crate::ask::{AskBox, AskView, Scheduler};
use crate::config::SiteConfig;
use crate::reveal::ObserverOptions;
use crate::storage::KeyValueStore;
use crate::theme::ThemeController;

pub struct Site<S> {
    config: SiteConfig,
    theme: ThemeController<S>,
}

impl<S: KeyValueStore> Site<S> {
    pub fn new(config: SiteConfig, store: S) -> Self {
        let theme = ThemeController::new(store, config.storage_key.clone());
        Self { config, theme }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::from(&self.config)
    }

    pub fn ask_box<V, T>(&self, view: Rc<V>, scheduler: T) -> AskBox<V, T>
    where
        V: AskView + 'static,
        T: Scheduler,
    {
        AskBox::new(view, scheduler, &self.config)
    }
}
