//! Portfolio Page Core Library
//!
//! Decision logic behind the portfolio page, kept free of any UI runtime so
//! it can be exercised directly from tests.
//!
//! ## Overview
//!
//! The only piece with real moving parts is the contact submission flow:
//! validate the form, try the optional email service, fall back to a
//! pre-filled mail draft, then report the outcome. The rest of the crate
//! holds the small rules the page applies while scrolling and clicking.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactFlow, ContactForm, EmailConfig, EmailJsClient};
//!
//! // `opener` is any `MailDraftOpener`, e.g. one that calls the OS URI handler
//! let config = EmailConfig::default();
//! let flow = ContactFlow::new(config.clone(), EmailJsClient::new(&config), opener);
//!
//! let outcome = flow
//!     .submit(&ContactForm {
//!         name: "Ana".into(),
//!         email: "ana@example.com".into(),
//!         phone: String::new(),
//!         message: "Hello there, let's talk".into(),
//!     })
//!     .await;
//! println!("{}", outcome.message());
//! ```

pub mod clipboard;
pub mod config;
pub mod contact;
pub mod dispatch;
pub mod error;
pub mod feedback;
pub mod flow;
pub mod form_state;
pub mod mailto;
pub mod outcome;
pub mod page;

// Re-exports
pub use clipboard::{copy_text, legacy_copy, ClipboardBackend, CopyButtonState, ScratchSurface};
pub use config::{DispatchCapability, EmailConfig};
pub use contact::{is_valid_email, validate, ContactForm, ContactRequest, Field};
pub use dispatch::{EmailDispatcher, EmailJsClient, TemplatePayload};
pub use error::{ClipboardError, DispatchError, MailDraftError, ValidationError};
pub use feedback::{DismissTicket, Feedback, FeedbackBanner, FeedbackKind, FEEDBACK_DISMISS_AFTER};
pub use flow::ContactFlow;
pub use form_state::{FieldMarks, SubmitGate, SENDING_LABEL};
pub use mailto::{MailDraft, MailDraftOpener};
pub use outcome::{FallbackReason, SubmissionOutcome};
