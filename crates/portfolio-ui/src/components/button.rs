//! Button Components
//!
//! Button styles used across the page:
//! - Primary: filled indigo, main actions ("Send")
//! - Secondary: outlined, secondary actions ("Clear")

use dioxus::prelude::*;

/// Label shown next to the spinner while a button is busy
pub const DEFAULT_LOADING_LABEL: &str = "Sending...";

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action button
    #[default]
    Primary,
    /// Outlined secondary action
    Secondary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content shown when idle
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Busy state: disables the button and swaps the content for a spinner
    #[props(default = false)]
    pub loading: bool,
    /// Text shown while loading
    #[props(default = DEFAULT_LOADING_LABEL.to_string())]
    pub loading_label: String,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// While `loading` is set the original children are replaced by a spinner and
/// `loading_label`; they come back as soon as `loading` clears.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         loading: sending(),
///         "Send"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let mut full_class = props.variant.class().to_string();
    if !extra_class.is_empty() {
        full_class = format!("{} {}", full_class, extra_class);
    }
    if props.loading {
        full_class.push_str(" loading");
    }

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled || props.loading,
            "aria-busy": if props.loading { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                span { class: "spinner", "aria-hidden": "true" }
                " {props.loading_label}"
            } else {
                {props.children}
            }
        }
    }
}
