//! Contact Form Types
//!
//! Raw form values, the validated request built from them, and the ordered
//! validation rules that sit between the two.

use std::sync::OnceLock;

use regex::Regex;
use crate::error::ValidationError;

/// Placeholder used wherever the optional phone number is missing
pub const PHONE_NOT_PROVIDED: &str = "not provided";

/// Minimum name length, in characters
pub const MIN_NAME_LEN: usize = 3;

/// Minimum message length, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// Fields of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Fields that must be filled in, in form order
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// DOM id of the field's input element
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Returns the display label for this field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }
}

/// Form values exactly as typed, untrimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Raw value of a single field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Mutable access used by the input handlers
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

/// A validated contact request, built at submission time and then dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// `None` when the phone field was left blank
    pub phone: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Phone number, or the "not provided" placeholder
    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_NOT_PROVIDED)
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// Check that `email` looks like `local@domain.tld`.
///
/// Deliberately permissive: anything without whitespace or a second `@`
/// around a dot in the domain part passes.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Whether the email input should show the error border after losing focus.
///
/// Blank input is not flagged; the submit-time check covers that case.
pub fn email_needs_mark_on_blur(raw: &str) -> bool {
    let email = raw.trim();
    !email.is_empty() && !is_valid_email(email)
}

/// Validate the form, stopping at the first failing rule.
///
/// # Rules
///
/// 1. Name, email and message non-empty after trimming
/// 2. Name at least 3 characters
/// 3. Email matches the `local@domain.tld` shape
/// 4. Message at least 10 characters
pub fn validate(form: &ContactForm) -> Result<ContactRequest, ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let message = form.message.trim();

    let missing: Vec<Field> = Field::REQUIRED
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired(missing));
    }

    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn accepts_simple_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["foo", "foo@bar", "foo@bar.", "@bar.com", "a b@c.d", "a@@b.c"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn missing_fields_are_listed_in_form_order() {
        let err = validate(&form("", "x@y.z", "  ")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired(vec![Field::Name, Field::Message])
        );
    }

    #[test]
    fn missing_wins_over_later_rules() {
        // Short name and bad email would fail too, but emptiness is checked first
        let err = validate(&form("Al", "bad", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired(vec![Field::Message]));
    }

    #[test]
    fn name_length_boundary() {
        assert_eq!(
            validate(&form("Al", "a@b.co", "0123456789")).unwrap_err(),
            ValidationError::NameTooShort
        );
        assert!(validate(&form("Ana", "a@b.co", "0123456789")).is_ok());
    }

    #[test]
    fn name_length_counts_chars() {
        assert!(validate(&form("Zoë", "a@b.co", "0123456789")).is_ok());
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(
            validate(&form("Ana", "a@b.co", "012345678")).unwrap_err(),
            ValidationError::MessageTooShort
        );
        assert!(validate(&form("Ana", "a@b.co", "0123456789")).is_ok());
    }

    #[test]
    fn values_are_trimmed() {
        let mut raw = form("  Ana  ", " a@b.co ", "  0123456789  ");
        raw.phone = "  ".to_string();
        let request = validate(&raw).unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "a@b.co");
        assert_eq!(request.message, "0123456789");
        assert_eq!(request.phone, None);
        assert_eq!(request.phone_or_default(), PHONE_NOT_PROVIDED);
    }

    #[test]
    fn blur_mark_ignores_blank() {
        assert!(!email_needs_mark_on_blur("   "));
        assert!(email_needs_mark_on_blur("foo@bar"));
        assert!(!email_needs_mark_on_blur(" a@b.co "));
    }

    #[test]
    fn phone_is_not_required() {
        assert!(!Field::Phone.is_required());
        assert!(Field::REQUIRED.iter().all(Field::is_required));
    }
}
