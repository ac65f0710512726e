//! Header Component
//!
//! Fixed header with the navigation menu. Hides while scrolling down,
//! highlights the link of the current section, and collapses into a
//! hamburger menu on narrow windows.

use dioxus::prelude::*;
use portfolio_core::page::MenuClick;

use crate::bridge;
use crate::context::{use_mobile_menu, use_page_scroll};

/// Navigation entries: section id and label
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Header() -> Element {
    let scroll = use_page_scroll();
    let mut menu = use_mobile_menu();

    let transform = scroll.read().header.transform();
    let active = scroll.read().active.clone();
    let toggle_class = menu.read().class("menu-toggle");
    let nav_class = menu.read().class("menu-nav");

    rsx! {
        header {
            class: "header-fixed",
            style: "transform: {transform};",

            a {
                class: "logo",
                href: "#home",
                onclick: move |e| {
                    e.prevent_default();
                    spawn(async move { bridge::scroll_to_anchor("#home").await });
                },
                "Antônio B. Jr."
            }

            button {
                id: "menuToggle",
                class: "{toggle_class}",
                "aria-label": "Toggle menu",
                onclick: move |e| {
                    e.stop_propagation();
                    menu.write().handle(MenuClick::Toggle);
                },
                span {}
                span {}
                span {}
            }

            ul {
                id: "menuNav",
                class: "{nav_class}",
                onclick: move |e| {
                    e.stop_propagation();
                    menu.write().handle(MenuClick::Inside);
                },

                for (id, label) in NAV_ITEMS {
                    li { key: "{id}",
                        a {
                            class: if active.as_deref() == Some(id) { "nav-link active" } else { "nav-link" },
                            href: "#{id}",
                            onclick: move |e| {
                                e.prevent_default();
                                e.stop_propagation();
                                menu.write().handle(MenuClick::NavLink);
                                let href = format!("#{}", id);
                                spawn(async move { bridge::scroll_to_anchor(&href).await });
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
