//! UI Components for the portfolio page.

mod contact_form;
mod contact_info;
mod header;
mod reveal;
mod scroll_top;
mod skills;

pub use contact_form::ContactForm;
pub use contact_info::ContactInfo;
pub use header::Header;
pub use reveal::Reveal;
pub use scroll_top::ScrollTop;
pub use skills::SkillList;
