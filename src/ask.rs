//! "Ask a question" box.
//!
//! DESIGN
//! ======
//! Two states, idle and showing-response. A valid submission shows a fixed
//! acknowledgment and schedules a hide. There is no backend; the question
//! text is read, checked and discarded.
//!
//! TRADE-OFFS
//! ==========
//! Hide timers are never cancelled. A timer left over from an earlier
//! submission can hide a response shown by a later one if both land inside
//! the same hide window. The page has always behaved this way.

#[cfg(test)]
#[path = "ask_test.rs"]
mod ask_test;

use std::rc::Rc;

use crate::config::SiteConfig;

/// The form's inputs and the response area.
pub trait AskView {
    /// Current question text, untrimmed.
    fn question(&self) -> String;
    /// Honeypot value, or `None` when the form has no honeypot field.
    fn honeypot(&self) -> Option<String>;
    fn clear_input(&self);
    /// Set the response text and mark it visible.
    fn show_response(&self, text: &str);
    /// Remove the visible marker; the text stays.
    fn hide_response(&self);
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// The browser's submit event.
pub trait SubmitEvent {
    fn prevent_default(&self);
}

/// Result of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Question blank after trimming; nothing changed.
    Empty,
    /// Honeypot filled; input cleared, no response.
    Trapped,
    /// Acknowledgment shown and hide scheduled.
    Answered,
}

pub struct AskBox<V, S> {
    view: Rc<V>,
    scheduler: S,
    response_text: String,
    hide_delay_ms: u32,
}

impl<V, S> AskBox<V, S>
where
    V: AskView + 'static,
    S: Scheduler,
{
    pub fn new(view: Rc<V>, scheduler: S, config: &SiteConfig) -> Self {
        Self {
            view,
            scheduler,
            response_text: config.ask_response_text.clone(),
            hide_delay_ms: config.ask_hide_delay_ms,
        }
    }

    /// Handle a form submit. The caller always suppresses the page reload.
    pub fn submit(&self) -> Submission {
        if self.view.question().trim().is_empty() {
            return Submission::Empty;
        }

        if self.view.honeypot().is_some_and(|value| !value.is_empty()) {
            log::debug!("ask box: honeypot filled, dropping submission");
            self.view.clear_input();
            return Submission::Trapped;
        }

        self.view.show_response(&self.response_text);
        self.view.clear_input();

        let view = Rc::clone(&self.view);
        self.scheduler
            .schedule(self.hide_delay_ms, Box::new(move || view.hide_response()));
        Submission::Answered
    }
}

/// Form `submit` listener. The page reload is always suppressed; when the
/// form's input or response element is missing (`ask` is `None`) nothing
/// else happens.
pub fn on_submit<V, S, E>(ask: Option<&AskBox<V, S>>, event: &E) -> Option<Submission>
where
    V: AskView + 'static,
    S: Scheduler,
    E: SubmitEvent + ?Sized,
{
    event.prevent_default();
    ask.map(AskBox::submit)
}
