//! Input Field Components
//!
//! Text inputs and textareas for the contact form.
//! Features:
//! - Red border while the field is marked invalid
//! - Focus requests driven by a counter prop, so marking the same field twice
//!   focuses it twice

use std::rc::Rc;

use dioxus::prelude::*;

/// Border color of a field marked invalid
pub const ERROR_BORDER_COLOR: &str = "#ef4444";

fn field_style(invalid: bool) -> String {
    if invalid {
        format!("border-color: {};", ERROR_BORDER_COLOR)
    } else {
        String::new()
    }
}

/// Focus the mounted element whenever `focus_request` changes to a non-zero value
fn use_focus_request(focus_request: u64) -> Signal<Option<Rc<MountedData>>> {
    let mounted = use_signal(|| None::<Rc<MountedData>>);

    use_effect(use_reactive!(|(focus_request,)| {
        if focus_request == 0 {
            return;
        }
        if let Some(element) = mounted.peek().clone() {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    tracing::debug!("Failed to focus field: {:?}", e);
                }
            });
        }
    }));

    mounted
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Handler called when the input gains focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, email, tel, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Show the error border
    #[props(default = false)]
    pub invalid: bool,
    /// Incremented by the owner to move focus here
    #[props(default = 0)]
    pub focus_request: u64,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let mut mounted = use_focus_request(props.focus_request);
    let style = field_style(props.invalid);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                style: "{style}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.required,
                onmounted: move |e| mounted.set(Some(e.data())),
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
                onfocus: move |_| {
                    if let Some(handler) = &props.onfocus {
                        handler.call(());
                    }
                },
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Show the error border
    #[props(default = false)]
    pub invalid: bool,
    /// Incremented by the owner to move focus here
    #[props(default = 0)]
    pub focus_request: u64,
}

/// Multi-line text field
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let mut mounted = use_focus_request(props.focus_request);
    let style = field_style(props.invalid);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                style: "{style}",
                rows: "{props.rows}",
                required: props.required,
                value: "{props.value}",
                onmounted: move |e| mounted.set(Some(e.data())),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_error_border() {
        assert_eq!(field_style(true), "border-color: #ef4444;");
        assert_eq!(field_style(false), "");
    }
}
