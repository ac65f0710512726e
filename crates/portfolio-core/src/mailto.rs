//! Mail draft composition
//!
//! Builds the `mailto:` link used when the email service is not available,
//! so the visitor's own mail client can send the message instead.

use crate::contact::ContactRequest;
use crate::error::MailDraftError;

/// Subject prefix; the sender's name follows it
pub const SUBJECT_PREFIX: &str = "Portfolio contact - ";

/// Last line of every draft body
pub const SIGNATURE: &str = "Sent via the online portfolio.";

/// A pre-filled email ready to hand to the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Compose the draft for a validated request
    pub fn compose(request: &ContactRequest, recipient: &str) -> Self {
        let body = [
            format!("Name: {}", request.name),
            format!("Email: {}", request.email),
            format!("Phone: {}", request.phone_or_default()),
            String::new(),
            "Message:".to_string(),
            request.message.clone(),
            String::new(),
            "---".to_string(),
            SIGNATURE.to_string(),
        ]
        .join("\n");

        Self {
            recipient: recipient.to_string(),
            subject: format!("{}{}", SUBJECT_PREFIX, request.name),
            body,
        }
    }

    /// `mailto:` URI with percent-encoded subject and body
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Platform hook that opens a composed draft in the default mail client
pub trait MailDraftOpener {
    fn open(&self, draft: &MailDraft) -> Result<(), MailDraftError>;
}

impl<T: MailDraftOpener + ?Sized> MailDraftOpener for &T {
    fn open(&self, draft: &MailDraft) -> Result<(), MailDraftError> {
        (**self).open(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: "Ana Lima".to_string(),
            email: "ana@example.com".to_string(),
            phone: phone.map(str::to_string),
            message: "Hello, I'd like to talk.".to_string(),
        }
    }

    #[test]
    fn body_has_labelled_lines() {
        let draft = MailDraft::compose(&request(Some("+55 11 9999")), "me@example.com");
        assert_eq!(draft.subject, "Portfolio contact - Ana Lima");
        assert_eq!(
            draft.body,
            "Name: Ana Lima\nEmail: ana@example.com\nPhone: +55 11 9999\n\nMessage:\nHello, I'd like to talk.\n\n---\nSent via the online portfolio."
        );
    }

    #[test]
    fn missing_phone_uses_placeholder() {
        let draft = MailDraft::compose(&request(None), "me@example.com");
        assert!(draft.body.contains("Phone: not provided\n"));
    }

    #[test]
    fn uri_is_percent_encoded() {
        let draft = MailDraft::compose(&request(None), "me@example.com");
        let uri = draft.uri();
        assert!(uri.starts_with("mailto:me@example.com?subject=Portfolio%20contact%20-%20Ana%20Lima&body="));
        assert!(uri.contains("Name%3A%20Ana%20Lima%0AEmail%3A%20ana%40example.com"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }
}
