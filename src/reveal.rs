//! One-shot fade-in reveals.
//!
//! Elements marked `.fade-in` at page load are tracked until they first
//! intersect the viewport, then gain `.visible` and are dropped from
//! tracking. Nothing is ever hidden again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::SiteConfig;

/// Intersection observer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target's area that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl From<&SiteConfig> for ObserverOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        }
    }
}

/// An element that can be switched to its revealed state.
pub trait RevealTarget: PartialEq {
    fn mark_visible(&self);
}

/// Set of elements still waiting to be revealed.
pub struct RevealTracker<T> {
    pending: Vec<T>,
}

impl<T: RevealTarget> RevealTracker<T> {
    /// Track `targets` as given; a `querySelectorAll` result has no repeats.
    pub fn new(targets: impl IntoIterator<Item = T>) -> Self {
        Self { pending: targets.into_iter().collect() }
    }

    /// Elements not yet revealed.
    #[must_use]
    pub fn pending(&self) -> &[T] {
        &self.pending
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Handle one observer entry.
    ///
    /// Returns `true` when `target` was revealed by this call, meaning the
    /// caller should stop observing it. Untracked or already revealed
    /// targets and non-intersecting entries return `false`.
    pub fn on_intersection(&mut self, target: &T, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(index) = self.pending.iter().position(|t| t == target) else {
            return false;
        };
        self.pending.swap_remove(index).mark_visible();
        true
    }

    /// Fallback when the platform has no intersection observer: reveal
    /// everything now. Returns how many elements were revealed.
    pub fn reveal_all(&mut self) -> usize {
        let count = self.pending.len();
        for target in self.pending.drain(..) {
            target.mark_visible();
        }
        count
    }
}
