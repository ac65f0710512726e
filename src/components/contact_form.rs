//! Contact Form Component
//!
//! Submit runs the core flow: validation errors mark fields and stop there;
//! valid input goes to the email service or, failing that, a mail draft.
//! The submit button stays disabled while a send is in flight.

use dioxus::prelude::*;
use portfolio_core::{
    validate, ContactForm as ContactFields, Feedback, FeedbackBanner, Field, FieldMarks,
    SubmissionOutcome, SubmitGate, FEEDBACK_DISMISS_AFTER, SENDING_LABEL,
};
use portfolio_ui::{Button, ButtonVariant, FeedbackMessage, Input, TextArea};

use crate::context::use_contact_flow;

/// Which field should take focus, plus a counter so repeated requests refire
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FocusRequest {
    field: Option<Field>,
    serial: u64,
}

impl FocusRequest {
    fn request(&mut self, field: Field) {
        self.field = Some(field);
        self.serial += 1;
    }

    /// Value for a field's `focus_request` prop
    fn for_field(&self, field: Field) -> u64 {
        if self.field == Some(field) {
            self.serial
        } else {
            0
        }
    }
}

/// Show `feedback` and schedule its dismissal
fn show_feedback(mut banner: Signal<FeedbackBanner>, feedback: Feedback) {
    let ticket = banner.write().show(feedback);
    spawn(async move {
        tokio::time::sleep(FEEDBACK_DISMISS_AFTER).await;
        banner.write().expire(ticket);
    });
}

#[component]
pub fn ContactForm() -> Element {
    let flow = use_contact_flow();
    let mut form = use_signal(ContactFields::default);
    let mut marks = use_signal(FieldMarks::new);
    let mut focus = use_signal(FocusRequest::default);
    let mut banner = use_signal(FeedbackBanner::new);
    let mut gate = use_signal(SubmitGate::new);

    let mut edit = move |field: Field, value: String| {
        *form.write().value_mut(field) = value;
        if field.is_required() {
            banner.write().on_field_edit();
        }
        marks.write().on_edit(field);
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        if gate().is_sending() {
            return;
        }

        banner.write().clear();
        marks.write().clear();

        let request = match validate(&form.read()) {
            Ok(request) => request,
            Err(err) => {
                // Each mark focuses its field in turn; the last one keeps focus
                if let Some(last) = marks.write().mark_invalid(err.fields()) {
                    focus.write().request(last);
                }
                show_feedback(banner, SubmissionOutcome::ValidationError(err).feedback());
                return;
            }
        };

        gate.write().begin();
        let flow = flow.clone();
        spawn(async move {
            let outcome = flow.deliver(&request).await;
            show_feedback(banner, outcome.feedback());
            if outcome.resets_form() {
                form.write().reset();
                marks.write().clear();
            }
            gate.write().finish();
        });
    };

    let onclear = move |_: ()| {
        form.write().reset();
        banner.write().clear();
        marks.write().clear();
    };

    let values = form.read().clone();
    let is_marked = |field: Field| marks.read().is_marked(field);
    let focus_now = focus();

    rsx! {
        form {
            id: "contact-form",
            "novalidate": "novalidate",
            onsubmit: onsubmit,

            Input {
                id: Field::Name.id().to_string(),
                label: Field::Name.label().to_string(),
                value: values.name,
                required: true,
                invalid: is_marked(Field::Name),
                focus_request: focus_now.for_field(Field::Name),
                oninput: move |v| edit(Field::Name, v),
            }
            Input {
                id: Field::Email.id().to_string(),
                label: Field::Email.label().to_string(),
                input_type: "email".to_string(),
                value: values.email,
                required: true,
                invalid: is_marked(Field::Email),
                focus_request: focus_now.for_field(Field::Email),
                oninput: move |v| edit(Field::Email, v),
                onblur: move |_| {
                    let email = form.read().email.clone();
                    marks.write().on_email_blur(&email);
                },
                onfocus: move |_| marks.write().on_focus(Field::Email),
            }
            Input {
                id: Field::Phone.id().to_string(),
                label: Field::Phone.label().to_string(),
                hint: "optional".to_string(),
                input_type: "tel".to_string(),
                value: values.phone,
                oninput: move |v| edit(Field::Phone, v),
            }
            TextArea {
                id: Field::Message.id().to_string(),
                label: Field::Message.label().to_string(),
                value: values.message,
                required: true,
                invalid: is_marked(Field::Message),
                focus_request: focus_now.for_field(Field::Message),
                oninput: move |v| edit(Field::Message, v),
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    loading: gate().is_sending(),
                    loading_label: SENDING_LABEL.to_string(),
                    "Send"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: onclear,
                    "Clear"
                }
            }

            FeedbackMessage { banner: banner() }
        }
    }
}
