//! Contact form UI state
//!
//! Which fields are marked invalid, and whether a send is in flight. Both are
//! plain values so the form component only has to store them in signals.

use std::collections::HashSet;

use crate::contact::{email_needs_mark_on_blur, Field};

/// Submit button label while a send is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Fields currently shown with the error border
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldMarks {
    marked: HashSet<Field>,
}

impl FieldMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every field of a failed validation.
    ///
    /// Returns the field that should end up with focus: the last one marked.
    pub fn mark_invalid<I>(&mut self, fields: I) -> Option<Field>
    where
        I: IntoIterator<Item = Field>,
    {
        let mut focus = None;
        for field in fields {
            self.marked.insert(field);
            focus = Some(field);
        }
        focus
    }

    /// Typing into a required field drops its mark
    pub fn on_edit(&mut self, field: Field) {
        if field.is_required() {
            self.marked.remove(&field);
        }
    }

    /// Re-check the email field when it loses focus
    pub fn on_email_blur(&mut self, value: &str) {
        if email_needs_mark_on_blur(value) {
            self.marked.insert(Field::Email);
        } else {
            self.marked.remove(&Field::Email);
        }
    }

    pub fn on_focus(&mut self, field: Field) {
        self.marked.remove(&field);
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    pub fn is_marked(&self, field: Field) -> bool {
        self.marked.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

/// Submit button state: one send at a time
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SubmitGate {
    sending: bool,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a send. `false` when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// End the current send, whatever its outcome
    pub fn finish(&mut self) {
        self.sending = false;
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Disabled while sending
    pub fn disabled(&self) -> bool {
        self.sending
    }

    pub fn label<'a>(&self, idle: &'a str) -> &'a str {
        if self.sending {
            SENDING_LABEL
        } else {
            idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_validation_marks_fields_and_focuses_last() {
        let mut marks = FieldMarks::new();
        let focus = marks.mark_invalid([Field::Name, Field::Message]);

        assert_eq!(focus, Some(Field::Message));
        assert!(marks.is_marked(Field::Name));
        assert!(marks.is_marked(Field::Message));
        assert!(!marks.is_marked(Field::Email));
    }

    #[test]
    fn editing_a_field_clears_only_its_mark() {
        let mut marks = FieldMarks::new();
        marks.mark_invalid([Field::Name, Field::Email]);

        marks.on_edit(Field::Name);
        assert!(!marks.is_marked(Field::Name));
        assert!(marks.is_marked(Field::Email));

        marks.on_edit(Field::Email);
        assert!(marks.is_empty());
    }

    #[test]
    fn email_blur_marks_bad_address_and_clears_good_one() {
        let mut marks = FieldMarks::new();

        marks.on_email_blur("not-an-email");
        assert!(marks.is_marked(Field::Email));

        marks.on_email_blur("ana@example.com");
        assert!(!marks.is_marked(Field::Email));

        // Empty is left for submit to report
        marks.on_email_blur("");
        assert!(!marks.is_marked(Field::Email));
    }

    #[test]
    fn focusing_email_drops_its_mark() {
        let mut marks = FieldMarks::new();
        marks.on_email_blur("bad");
        marks.on_focus(Field::Email);
        assert!(marks.is_empty());
    }

    #[test]
    fn gate_blocks_second_send_until_finished() {
        let mut gate = SubmitGate::new();
        assert!(!gate.disabled());
        assert_eq!(gate.label("Send"), "Send");

        assert!(gate.begin());
        assert!(gate.disabled());
        assert_eq!(gate.label("Send"), SENDING_LABEL);
        assert!(!gate.begin());

        gate.finish();
        assert!(!gate.is_sending());
        assert_eq!(gate.label("Send"), "Send");
        assert!(gate.begin());
    }
}
