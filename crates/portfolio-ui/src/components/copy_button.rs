//! Copy Button Component
//!
//! Small button that copies a fixed value (email, phone) to the clipboard.
//! The actual copy is done by the owner through `oncopy`; this component only
//! renders the idle/"copied" states.

use dioxus::prelude::*;
use portfolio_core::CopyButtonState;

/// Properties for the CopyButton component
#[derive(Clone, PartialEq, Props)]
pub struct CopyButtonProps {
    /// Text to copy
    pub value: String,
    /// Idle label
    pub label: String,
    /// Label state, owned by the caller
    pub state: CopyButtonState,
    /// Called with `value` on click; never called for an empty value
    pub oncopy: EventHandler<String>,
}

#[component]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let class = if props.state.is_copied() {
        "copy-btn copied"
    } else {
        "copy-btn"
    };
    let label = props.state.label(&props.label).to_string();
    let value = props.value.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "data-copy": "{props.value}",
            onclick: move |_| {
                if value.is_empty() {
                    return;
                }
                props.oncopy.call(value.clone());
            },
            "{label}"
        }
    }
}
