//! Portfolio Page UI Components
//!
//! Dioxus components shared by the portfolio page.
//!
//! ## Design Notes
//!
//! - **Indigo (#6366f1)**: primary actions, active links
//! - **Cyan (#06b6d4)**: accents
//! - **Red (#ef4444)**: field errors
//! - **Green (#10b981)**: success feedback
//!
//! Components stay dumb: state lives in `portfolio-core` types owned by the
//! page, and components receive it through props.

pub mod components;

pub use components::*;
