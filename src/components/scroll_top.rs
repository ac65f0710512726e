//! Scroll-to-top button, shown once the page is scrolled past a threshold.

use dioxus::prelude::*;
use portfolio_core::page::scroll_top_visible;

use crate::bridge;
use crate::context::use_page_scroll;

#[component]
pub fn ScrollTop() -> Element {
    let scroll = use_page_scroll();
    let visible = scroll_top_visible(scroll.read().y);

    rsx! {
        button {
            id: "scrollTop",
            class: if visible { "scroll-top visible" } else { "scroll-top" },
            "aria-label": "Back to top",
            onclick: move |_| bridge::smooth_scroll_to(0.0),
            "↑"
        }
    }
}
