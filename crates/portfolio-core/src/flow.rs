//! Contact submission flow
//!
//! validate → send through the email service (when configured) → fall back to
//! a mail draft → classify the outcome.
//!
//! Rendering is not done here. The caller shows [`SubmissionOutcome::feedback`],
//! marks [`ValidationError::fields`](crate::ValidationError::fields) and resets
//! the form when [`SubmissionOutcome::resets_form`] says so.

use crate::config::{DispatchCapability, EmailConfig};
use crate::contact::{validate, ContactForm, ContactRequest};
use crate::dispatch::{EmailDispatcher, TemplatePayload};
use crate::mailto::{MailDraft, MailDraftOpener};
use crate::outcome::{FallbackReason, SubmissionOutcome};

/// One contact form's delivery pipeline
pub struct ContactFlow<D, O> {
    config: EmailConfig,
    capability: DispatchCapability,
    dispatcher: D,
    opener: O,
}

impl<D, O> ContactFlow<D, O>
where
    D: EmailDispatcher,
    O: MailDraftOpener,
{
    /// Capture the configuration; readiness is decided here, once
    pub fn new(config: EmailConfig, dispatcher: D, opener: O) -> Self {
        let capability = config.capability();
        Self {
            config,
            capability,
            dispatcher,
            opener,
        }
    }

    pub fn capability(&self) -> DispatchCapability {
        self.capability
    }

    /// Validate and, if valid, deliver
    pub async fn submit(&self, form: &ContactForm) -> SubmissionOutcome {
        match validate(form) {
            Ok(request) => self.deliver(&request).await,
            Err(err) => {
                tracing::debug!(error = %err, "Contact form rejected");
                SubmissionOutcome::ValidationError(err)
            }
        }
    }

    /// Deliver an already validated request.
    ///
    /// Never fails: a dispatch error is logged and answered with a mail draft.
    pub async fn deliver(&self, request: &ContactRequest) -> SubmissionOutcome {
        let (service_id, template_id) = match (
            self.capability,
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
        ) {
            (DispatchCapability::Ready, Some(service), Some(template)) => (service, template),
            _ => return self.open_draft(request, FallbackReason::NotConfigured),
        };

        let payload = TemplatePayload::new(request, &self.config.recipient);
        match self.dispatcher.send(service_id, template_id, &payload).await {
            Ok(()) => {
                tracing::info!("Contact message sent through the email service");
                SubmissionOutcome::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "Email service failed, opening mail draft instead");
                self.open_draft(request, FallbackReason::DispatchFailed)
            }
        }
    }

    fn open_draft(&self, request: &ContactRequest, reason: FallbackReason) -> SubmissionOutcome {
        let draft = MailDraft::compose(request, &self.config.recipient);
        if let Err(e) = self.opener.open(&draft) {
            tracing::warn!(error = %e, "Could not open mail draft");
        }
        SubmissionOutcome::FallbackSuccess { reason, draft }
    }
}
