//! Page modules, one per top-level view.
//!
//! ARCHITECTURE
//! ============
//! Each page owns view-scoped orchestration (fetches, local form state) and
//! delegates rendering details to `components`.

pub mod certificate;
pub mod exercises;
pub mod home;
pub mod tutorial;
pub mod tutorials;
