//! Error types for the portfolio page

use thiserror::Error;

use crate::contact::Field;

/// A contact form value failed one of the ordered validation rules.
///
/// Only the first failing rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are blank after trimming
    #[error("Please fill in all required fields.")]
    MissingRequired(Vec<Field>),

    /// Name shorter than the minimum length
    #[error("Name must be at least 3 characters long.")]
    NameTooShort,

    /// Email does not have a `local@domain.tld` shape
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Message shorter than the minimum length
    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

impl ValidationError {
    /// Fields that should be marked for this error, in form order.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            ValidationError::MissingRequired(fields) => fields.clone(),
            ValidationError::NameTooShort => vec![Field::Name],
            ValidationError::InvalidEmail => vec![Field::Email],
            ValidationError::MessageTooShort => vec![Field::Message],
        }
    }
}

/// The email service could not deliver the message
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Service id, template id or public key missing
    #[error("Email service is not configured")]
    NotConfigured,

    /// Transport failure talking to the service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Copying text to the clipboard failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Platform clipboard could not be reached
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The legacy copy command reported failure
    #[error("Copy command failed")]
    CommandFailed,

    /// Script bridge to the page failed
    #[error("Script error: {0}")]
    Script(String),
}

/// The platform refused to open a mail draft
#[derive(Error, Debug)]
pub enum MailDraftError {
    #[error("Failed to open mail draft: {0}")]
    Open(String),
}

/// Result type alias for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Result type alias for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidEmail;
        assert_eq!(format!("{}", err), "Please enter a valid email address.");
    }

    #[test]
    fn test_missing_required_fields() {
        let err = ValidationError::MissingRequired(vec![Field::Name, Field::Message]);
        assert_eq!(err.fields(), vec![Field::Name, Field::Message]);
        assert_eq!(ValidationError::NameTooShort.fields(), vec![Field::Name]);
    }

    #[test]
    fn test_rejected_display() {
        let err = DispatchError::Rejected {
            status: 400,
            body: "bad template".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Email service rejected the message (400): bad template"
        );
    }
}
