//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`nav`, `tutorial`, `assistant`, etc.) so each
//! engine can be tested alone. `session` composes them into the one value
//! the UI shares through context.

pub mod assistant;
pub mod auth;
pub mod knowledge;
pub mod nav;
pub mod preview;
pub mod session;
pub mod tutorial;
pub mod ui;
