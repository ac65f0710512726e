//! Page behaviors outside the contact form
//!
//! Menu, scrolling and reveal rules. Each one is a small state holder or a
//! pure function; the desktop app feeds them scroll positions and clicks
//! coming from the webview.

pub mod menu;
pub mod reveal;
pub mod scroll;

pub use menu::{MenuClick, MobileMenu};
pub use reveal::{RevealKind, RevealSet, Skill};
pub use scroll::{
    active_section, anchor_scroll_top, anchor_target, scroll_top_visible, HeaderAutoHide,
    HeaderPosition, SectionBounds,
};
