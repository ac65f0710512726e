//! Reveal Component
//!
//! Wrapper that starts offset and invisible and animates in once the
//! webview reports it entering the viewport.

use dioxus::prelude::*;
use portfolio_core::page::RevealKind;

use crate::context::use_reveal_set;

#[component]
pub fn Reveal(
    /// Unique element id, reported back by the observer
    id: String,
    /// Animation name, e.g. "fade-up"
    #[props(default = "fade-up".to_string())]
    animation: String,
    children: Element,
) -> Element {
    let revealed = use_reveal_set();
    let kind = RevealKind::parse(&animation);
    let class = revealed.read().class(&id);
    let style = revealed.read().style(&id, kind);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "{style}",
            "data-aos": "{kind.name()}",
            {children}
        }
    }
}
