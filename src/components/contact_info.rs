//! Contact Info Component
//!
//! Direct contact details, each with a copy button. Copy goes through the OS
//! clipboard when there is one and the webview's legacy copy otherwise; if
//! both fail the user is asked to copy by hand.

use dioxus::prelude::*;
use portfolio_core::clipboard::{COPY_FEEDBACK_DURATION, MANUAL_COPY_ALERT};
use portfolio_core::{copy_text, ClipboardBackend, CopyButtonState};
use portfolio_ui::CopyButton;

use crate::bridge::{self, ArboardClipboard, WebviewScratch};
use crate::get_email_config;

pub const CONTACT_PHONE: &str = "+55 11 99999-0000";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/antoniobernabio";

#[component]
pub fn ContactInfo() -> Element {
    let email = get_email_config().recipient;

    rsx! {
        div { class: "contact-info",
            CopyField { label: "Email".to_string(), value: email }
            CopyField { label: "Phone".to_string(), value: CONTACT_PHONE.to_string() }
            CopyField { label: "LinkedIn".to_string(), value: LINKEDIN_URL.to_string() }
        }
    }
}

#[component]
fn CopyField(label: String, value: String) -> Element {
    let mut state = use_signal(CopyButtonState::new);

    let oncopy = move |text: String| {
        spawn(async move {
            let primary = ArboardClipboard::open();
            let primary_ref = primary.as_ref().map(|c| c as &dyn ClipboardBackend);

            match copy_text(primary_ref, &WebviewScratch, &text).await {
                Ok(()) => {
                    let ticket = state.write().mark_copied();
                    tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
                    state.write().restore(ticket);
                }
                Err(e) => {
                    tracing::warn!("Copy failed: {}", e);
                    bridge::alert(MANUAL_COPY_ALERT).await;
                }
            }
        });
    };

    rsx! {
        div { class: "contact-item",
            div {
                strong { "{label}" }
                p { "{value}" }
            }
            CopyButton {
                value: value.clone(),
                label: "Copy".to_string(),
                state: state(),
                oncopy: oncopy,
            }
        }
    }
}
