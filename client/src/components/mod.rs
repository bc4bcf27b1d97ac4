//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading and
//! writing the shared session through Leptos context.

pub mod assistant_panel;
pub mod navbar;
pub mod output_pane;
pub mod sign_in_modal;
pub mod ticker_banner;
