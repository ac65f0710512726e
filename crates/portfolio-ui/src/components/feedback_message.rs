//! Feedback Message Component
//!
//! Status line under the contact form. Hidden when the banner has nothing
//! visible; scrolled into view every time a new message is shown.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::FeedbackBanner;

/// Properties for the FeedbackMessage component
#[derive(Clone, PartialEq, Props)]
pub struct FeedbackMessageProps {
    /// Banner state owned by the form
    pub banner: FeedbackBanner,
}

#[component]
pub fn FeedbackMessage(props: FeedbackMessageProps) -> Element {
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let generation = props.banner.generation();
    let showing = props.banner.visible().is_some();

    use_effect(use_reactive!(|(generation, showing)| {
        if !showing {
            return;
        }
        tracing::trace!(generation, "Scrolling feedback into view");
        if let Some(element) = mounted.peek().clone() {
            spawn(async move {
                let _ = element.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    }));

    let class = props.banner.class();
    let (display, text) = match props.banner.visible() {
        Some(feedback) => ("block", feedback.message.clone()),
        None => ("none", String::new()),
    };

    rsx! {
        div {
            id: "feedback-message",
            class: "{class}",
            style: "display: {display};",
            role: "status",
            "aria-live": "polite",
            onmounted: move |e| mounted.set(Some(e.data())),
            "{text}"
        }
    }
}
