//! Browser bindings and startup wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the behavior traits for `web_sys` types and attaches the four
//! page units: theme selector, fade-in reveal, smooth nav scrolling and the
//! ask box. Units are independent; a failure binding one is logged and the
//! rest still attach.
//!
//! Listener closures live for the whole page and are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::ask::{self, AskView, Scheduler, SubmitEvent};
use crate::config::SiteConfig;
use crate::consts::{
    ACTIVE_CLASS, ARIA_PRESSED_ATTR, ASK_FORM_ID, ASK_INPUT_ID, ASK_RESPONSE_ID, CONFIG_ELEMENT_ID,
    FADE_IN_SELECTOR, HONEYPOT_SELECTOR, NAV_LINK_SELECTOR, THEME_OPTION_ATTR, THEME_OPTION_SELECTOR,
    THEME_ROOT_ATTR, VISIBLE_CLASS,
};
use crate::error::SiteError;
use crate::reveal::{ObserverOptions, RevealTarget, RevealTracker};
use crate::scroll::{self, FragmentResolver, ScrollOutcome, ScrollTarget};
use crate::site::Site;
use crate::storage::LocalStorage;
use crate::theme::{Theme, ThemeControl, ThemeRoot};

type PageSite = Site<LocalStorage>;

// =============================================================
// Trait implementations
// =============================================================

/// `<html>`.
struct DocumentRoot(Element);

impl ThemeRoot for DocumentRoot {
    fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.0.set_attribute(THEME_ROOT_ATTR, theme.as_str()) {
            log::warn!("set {THEME_ROOT_ATTR}: {e:?}");
        }
    }
}

impl ThemeControl for Element {
    fn option(&self) -> Option<String> {
        self.get_attribute(THEME_OPTION_ATTR)
    }

    fn set_active(&self, active: bool) {
        if let Err(e) = self.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            log::warn!("toggle .{ACTIVE_CLASS}: {e:?}");
        }
        let pressed = if active { "true" } else { "false" };
        if let Err(e) = self.set_attribute(ARIA_PRESSED_ATTR, pressed) {
            log::warn!("set {ARIA_PRESSED_ATTR}: {e:?}");
        }
    }
}

impl RevealTarget for Element {
    fn mark_visible(&self) {
        add_class(self, VISIBLE_CLASS);
    }
}

impl ScrollTarget for Element {
    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl FragmentResolver for Document {
    type Target = Element;

    fn resolve(&self, fragment: &str) -> Option<Element> {
        match self.query_selector(fragment) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("{fragment:?} is not a valid selector: {e:?}");
                None
            }
        }
    }
}

struct AskForm {
    form: Element,
    input: Element,
    response: Element,
}

impl AskView for AskForm {
    fn question(&self) -> String {
        field_value(&self.input).unwrap_or_default()
    }

    fn honeypot(&self) -> Option<String> {
        match self.form.query_selector(HONEYPOT_SELECTOR) {
            Ok(field) => field.as_ref().and_then(field_value),
            Err(e) => {
                log::debug!("honeypot lookup: {e:?}");
                None
            }
        }
    }

    fn clear_input(&self) {
        set_field_value(&self.input, "");
    }

    fn show_response(&self, text: &str) {
        self.response.set_text_content(Some(text));
        add_class(&self.response, VISIBLE_CLASS);
    }

    fn hide_response(&self) {
        if let Err(e) = self.response.class_list().remove_1(VISIBLE_CLASS) {
            log::warn!("remove .{VISIBLE_CLASS}: {e:?}");
        }
    }
}

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// `setTimeout`. Timers are never cancelled, so the handle is leaked.
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

// =============================================================
// Helpers
// =============================================================

fn add_class(el: &Element, class: &str) {
    if let Err(e) = el.class_list().add_1(class) {
        log::warn!("add .{class}: {e:?}");
    }
}

fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn set_field_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("querySelectorAll({selector:?}): {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SiteError::Bind(format!("{event} listener: {e:?}")))?;
    closure.forget();
    Ok(())
}

fn embedded_config(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

// =============================================================
// Units
// =============================================================

fn bind_theme(document: &Document, site: &Rc<PageSite>) -> Result<(), SiteError> {
    let root = Rc::new(DocumentRoot(document.document_element().ok_or(SiteError::NoDocument)?));
    let controls: Rc<[Element]> = query_all(document, THEME_OPTION_SELECTOR).into();

    site.theme().restore(root.as_ref(), &controls[..]);

    for control in controls.iter() {
        let site = Rc::clone(site);
        let root = Rc::clone(&root);
        let all = Rc::clone(&controls);
        let clicked = control.clone();
        listen(control, "click", move |_event| {
            let option = clicked.get_attribute(THEME_OPTION_ATTR);
            site.theme().select(root.as_ref(), &all[..], option.as_deref());
        })?;
    }
    Ok(())
}

fn bind_reveal(window: &Window, document: &Document, site: &PageSite) -> Result<(), SiteError> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new(query_all(document, FADE_IN_SELECTOR))));
    if tracker.borrow().is_done() {
        return Ok(());
    }

    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        let revealed = tracker.borrow_mut().reveal_all();
        log::debug!("no IntersectionObserver, revealed {revealed} elements");
        return Ok(());
    }

    if let Err(e) = observe(&tracker, &site.observer_options()) {
        let revealed = tracker.borrow_mut().reveal_all();
        log::warn!("{e}; revealed {revealed} elements without animation");
    }
    Ok(())
}

fn observe(tracker: &Rc<RefCell<RevealTracker<Element>>>, options: &ObserverOptions) -> Result<(), SiteError> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let pending = Rc::clone(tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut pending = pending.borrow_mut();
            for entry in entries.iter().flat_map(|entry| entry.dyn_into::<IntersectionObserverEntry>()) {
                let target = entry.target();
                if pending.on_intersection(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| SiteError::Bind(format!("intersection observer: {e:?}")))?;
    callback.forget();

    for target in tracker.borrow().pending() {
        observer.observe(target);
    }
    Ok(())
}

fn bind_smooth_scroll(document: &Document) -> Result<(), SiteError> {
    for link in query_all(document, NAV_LINK_SELECTOR) {
        let page = document.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event: Event| {
            let href = anchor.get_attribute("href");
            if scroll::activate(&page, href.as_deref()) == ScrollOutcome::Intercepted {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

fn bind_ask_box(document: &Document, site: &PageSite) -> Result<(), SiteError> {
    let Some(form) = document.get_element_by_id(ASK_FORM_ID) else {
        return Ok(());
    };

    let ask_box = match ask_view(document, &form) {
        Ok(view) => Some(site.ask_box(Rc::new(view), TimeoutScheduler)),
        Err(e) => {
            log::warn!("ask box inert: {e}");
            None
        }
    };
    listen(&form, "submit", move |event: Event| {
        if let Some(outcome) = ask::on_submit(ask_box.as_ref(), &event) {
            log::debug!("ask box submission: {outcome:?}");
        }
    })
}

fn ask_view(document: &Document, form: &Element) -> Result<AskForm, SiteError> {
    let input = document
        .get_element_by_id(ASK_INPUT_ID)
        .ok_or_else(|| SiteError::MissingElement(format!("#{ASK_INPUT_ID}")))?;
    let response = document
        .get_element_by_id(ASK_RESPONSE_ID)
        .ok_or_else(|| SiteError::MissingElement(format!("#{ASK_RESPONSE_ID}")))?;
    Ok(AskForm { form: form.clone(), input, response })
}

/// Resolve config and attach every unit to the current document.
///
/// # Errors
///
/// Returns [`SiteError::NoWindow`] or [`SiteError::NoDocument`] outside a
/// page. Per-unit failures are logged, not returned.
pub fn boot() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    let config = SiteConfig::from_embedded(embedded_config(&document).as_deref());
    let site = Rc::new(Site::new(config, LocalStorage::from_window(&window)));

    let units = [
        ("theme", bind_theme(&document, &site)),
        ("reveal", bind_reveal(&window, &document, &site)),
        ("smooth scroll", bind_smooth_scroll(&document)),
        ("ask box", bind_ask_box(&document, &site)),
    ];
    for (unit, result) in units {
        if let Err(e) = result {
            log::warn!("{unit} disabled: {e}");
        }
    }
    Ok(())
}
