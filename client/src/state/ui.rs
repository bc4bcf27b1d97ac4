//! Local UI chrome state (modals and their inline messages).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so the sign-in
//! modal can open and close without touching navigation or identity.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sign_in_open: bool,
    /// Inline error shown inside the sign-in modal.
    pub sign_in_error: Option<String>,
}

impl UiState {
    pub fn open_sign_in(&mut self) {
        self.sign_in_open = true;
        self.sign_in_error = None;
    }

    pub fn close_sign_in(&mut self) {
        self.sign_in_open = false;
        self.sign_in_error = None;
    }

    pub fn reject_sign_in(&mut self, message: &str) {
        self.sign_in_error = Some(message.to_owned());
    }
}
