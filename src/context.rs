//! Page-wide context for the portfolio.
//!
//! The App component provides these once; children read them with the
//! `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let flow = use_contact_flow();
//! let scroll = use_page_scroll();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::page::{HeaderPosition, MobileMenu, RevealSet};
use portfolio_core::{ContactFlow, EmailJsClient};

use crate::bridge::SystemMailOpener;

/// Contact flow shared by the form.
///
/// Built once from the startup configuration; `Rc` because the form clones
/// it into each submission task.
pub type SharedFlow = Rc<ContactFlow<EmailJsClient, SystemMailOpener>>;

/// Build the contact flow from the startup configuration.
pub fn build_contact_flow() -> SharedFlow {
    let config = crate::get_email_config();
    let client = EmailJsClient::new(&config);
    Rc::new(ContactFlow::new(config, client, SystemMailOpener))
}

/// Hook to access the contact flow from context.
pub fn use_contact_flow() -> SharedFlow {
    use_context::<SharedFlow>()
}

/// What the page knows about the current scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageScroll {
    /// Document scroll offset
    pub y: f64,
    /// Header placement from the auto-hide rule
    pub header: HeaderPosition,
    /// Section whose nav link is highlighted
    pub active: Option<String>,
}

/// Hook to access the scroll state.
///
/// Updated by the App's scroll listener on load and on every scroll event.
pub fn use_page_scroll() -> Signal<PageScroll> {
    use_context::<Signal<PageScroll>>()
}

/// Hook to access the mobile menu state.
pub fn use_mobile_menu() -> Signal<MobileMenu> {
    use_context::<Signal<MobileMenu>>()
}

/// Hook to access the set of revealed elements.
pub fn use_reveal_set() -> Signal<RevealSet> {
    use_context::<Signal<RevealSet>>()
}
