use dioxus::prelude::*;
use portfolio_core::page::{active_section, HeaderAutoHide, MenuClick, MobileMenu, RevealSet};

use crate::bridge::{self, ScrollSnapshot};
use crate::context::{build_contact_flow, PageScroll};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page, all sections stacked
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, page context, the scroll listener and routing.
#[component]
pub fn App() -> Element {
    let mut page_scroll = use_signal(PageScroll::default);
    let mut menu = use_signal(MobileMenu::default);
    let reveal = use_signal(RevealSet::default);

    use_context_provider(build_contact_flow);
    use_context_provider(|| page_scroll);
    use_context_provider(|| menu);
    use_context_provider(|| reveal);

    use_effect(|| {
        bridge::mark_page_loaded();
    });

    // Single listener feeding header, active link and scroll-to-top
    use_future(move || async move {
        let mut listener = bridge::scroll_listener();
        let mut header = HeaderAutoHide::default();

        loop {
            match listener.recv::<ScrollSnapshot>().await {
                Ok(snapshot) => {
                    let position = header.on_scroll(snapshot.y);
                    let active = active_section(snapshot.y, &snapshot.sections).map(str::to_string);

                    let mut state = page_scroll.write();
                    state.y = snapshot.y;
                    state.header = position;
                    if active.is_some() {
                        state.active = active;
                    }
                }
                Err(e) => {
                    tracing::warn!("Scroll listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "page-root",
            onclick: move |_| {
                if menu.peek().is_open() {
                    menu.write().handle(MenuClick::Outside);
                }
            },
            Router::<Route> {}
        }
    }
}
