//! Status message shown under the contact form
//!
//! Exactly one message is visible at a time. Every [`FeedbackBanner::show`]
//! hands out a [`DismissTicket`]; the caller sleeps for
//! [`FEEDBACK_DISMISS_AFTER`] and then redeems it. Showing another message in
//! the meantime invalidates older tickets, which is how a pending dismissal
//! gets cancelled without touching the sleeping task.

use std::time::Duration;

/// How long a status message stays on screen
pub const FEEDBACK_DISMISS_AFTER: Duration = Duration::from_millis(6000);

/// Visual style of a status message
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Returns the CSS class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn new(message: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, FeedbackKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, FeedbackKind::Error)
    }
}

/// Handle for the dismissal scheduled by one `show` call
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DismissTicket(u64);

/// The single status message slot
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FeedbackBanner {
    current: Option<Feedback>,
    visible: bool,
    generation: u64,
}

impl FeedbackBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and start a fresh dismissal window
    pub fn show(&mut self, feedback: Feedback) -> DismissTicket {
        self.generation += 1;
        self.current = Some(feedback);
        self.visible = true;
        DismissTicket(self.generation)
    }

    /// Hide the message if `ticket` is still the latest one.
    ///
    /// Returns `true` when something was hidden.
    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// A required field was edited: hide a visible error, leave successes alone
    pub fn on_field_edit(&mut self) -> bool {
        match &self.current {
            Some(feedback) if self.visible && feedback.kind == FeedbackKind::Error => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Empty the slot, e.g. before validating again or on "clear"
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
        self.visible = false;
    }

    /// Bumped by every `show` and `clear`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Message currently on screen
    pub fn visible(&self) -> Option<&Feedback> {
        self.current.as_ref().filter(|_| self.visible)
    }

    /// Full CSS class list for the message element
    pub fn class(&self) -> String {
        match self.visible() {
            Some(feedback) => format!("feedback-message {}", feedback.kind.class()),
            None => "feedback-message".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_expire_hides() {
        let mut banner = FeedbackBanner::new();
        let ticket = banner.show(Feedback::success("sent"));
        assert_eq!(banner.visible().map(|f| f.message.as_str()), Some("sent"));
        assert!(banner.expire(ticket));
        assert!(banner.visible().is_none());
    }

    #[test]
    fn newer_message_invalidates_older_ticket() {
        let mut banner = FeedbackBanner::new();
        let first = banner.show(Feedback::error("first"));
        let second = banner.show(Feedback::success("second"));

        // The first timer fires while the second message is up
        assert!(!banner.expire(first));
        assert_eq!(banner.visible().map(|f| f.message.as_str()), Some("second"));

        assert!(banner.expire(second));
        // A duplicate dismissal is a no-op
        assert!(!banner.expire(second));
    }

    #[test]
    fn field_edit_hides_only_errors() {
        let mut banner = FeedbackBanner::new();
        banner.show(Feedback::success("sent"));
        assert!(!banner.on_field_edit());
        assert!(banner.visible().is_some());

        banner.show(Feedback::error("bad"));
        assert!(banner.on_field_edit());
        assert!(banner.visible().is_none());
    }

    #[test]
    fn clear_invalidates_pending_ticket() {
        let mut banner = FeedbackBanner::new();
        let ticket = banner.show(Feedback::success("sent"));
        banner.clear();
        assert!(!banner.expire(ticket));
        assert_eq!(banner.class(), "feedback-message");
    }

    #[test]
    fn class_includes_kind() {
        let mut banner = FeedbackBanner::new();
        banner.show(Feedback::error("bad"));
        assert_eq!(banner.class(), "feedback-message error");
    }
}
