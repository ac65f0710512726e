//! Submission outcomes and the feedback they produce

use crate::error::ValidationError;
use crate::feedback::{Feedback, FeedbackKind};
use crate::mailto::MailDraft;

pub const SENT_MESSAGE: &str = "✅ Message sent successfully! Thanks for getting in touch.";

pub const DISPATCH_FAILED_MESSAGE: &str =
    "⚠️ We couldn't send it automatically, but we opened your email with the message ready.";

pub const DRAFT_OPENED_MESSAGE: &str =
    "📮 We opened your email client with a ready-made message. Just review and send!";

/// Why the mail draft path was taken
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FallbackReason {
    /// The email service is not configured
    NotConfigured,
    /// The email service rejected or failed the send
    DispatchFailed,
}

/// Classified result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Sent through the email service
    Success,
    /// A mail draft was composed and handed to the platform
    FallbackSuccess {
        reason: FallbackReason,
        draft: MailDraft,
    },
    /// Input rejected; nothing was sent
    ValidationError(ValidationError),
}

impl SubmissionOutcome {
    /// User-facing status text
    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Success => SENT_MESSAGE.to_string(),
            SubmissionOutcome::FallbackSuccess { reason, .. } => match reason {
                FallbackReason::DispatchFailed => DISPATCH_FAILED_MESSAGE.to_string(),
                FallbackReason::NotConfigured => DRAFT_OPENED_MESSAGE.to_string(),
            },
            SubmissionOutcome::ValidationError(err) => format!("⚠️ {}", err),
        }
    }

    /// Styling used for the status message
    pub fn kind(&self) -> FeedbackKind {
        match self {
            SubmissionOutcome::ValidationError(_) => FeedbackKind::Error,
            _ => FeedbackKind::Success,
        }
    }

    /// Whether the form should be cleared after showing this outcome
    pub fn resets_form(&self) -> bool {
        !matches!(self, SubmissionOutcome::ValidationError(_))
    }

    /// Mail draft produced along the way, if any
    pub fn draft(&self) -> Option<&MailDraft> {
        match self {
            SubmissionOutcome::FallbackSuccess { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.message(), self.kind())
    }
}
