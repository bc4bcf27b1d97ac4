//! Name-only learner identity for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! There are no accounts: signing in just records a display name in memory.
//! The name personalizes the assistant greeting and unlocks certificates.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Learner {
    name: String,
}

impl Learner {
    /// Sign in under `raw`, trimmed. Blank names are refused.
    pub fn sign_in(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self { name: name.to_owned() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Message shown next to the sign-in form when the name is blank.
pub const NAME_REQUIRED_MESSAGE: &str = "Enter your name to sign in.";
