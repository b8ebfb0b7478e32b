//! Smooth scrolling for in-page navigation links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Resolves a fragment href (`#about`) to an element on the page.
pub trait FragmentResolver {
    type Target: ScrollTarget;

    /// `None` when nothing matches or the fragment is not a valid selector.
    fn resolve(&self, fragment: &str) -> Option<Self::Target>;
}

pub trait ScrollTarget {
    /// Animate so the element's top meets the viewport's top.
    fn scroll_into_view_smooth(&self);
}

/// What the click handler should do with the browser's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Target found and scrolled to; suppress the default jump.
    Intercepted,
    /// Leave navigation to the browser.
    PassThrough,
}

/// Same-document fragment link.
#[must_use]
pub fn is_fragment_href(href: &str) -> bool {
    href.starts_with('#')
}

/// Handle activation of a nav link whose `href` attribute is `href`.
pub fn activate<R: FragmentResolver + ?Sized>(resolver: &R, href: Option<&str>) -> ScrollOutcome {
    let Some(href) = href.filter(|h| is_fragment_href(h)) else {
        return ScrollOutcome::PassThrough;
    };
    match resolver.resolve(href) {
        Some(target) => {
            target.scroll_into_view_smooth();
            ScrollOutcome::Intercepted
        }
        None => ScrollOutcome::PassThrough,
    }
}
