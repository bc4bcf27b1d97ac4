//! Networking modules for the tutorial content service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` classifies failures for display, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
