//! Reusable UI components for the portfolio page

mod button;
mod copy_button;
mod feedback_message;
mod input;

pub use button::*;
pub use copy_button::*;
pub use feedback_message::*;
pub use input::*;
