use super::*;

#[test]
fn ui_state_default_has_modal_closed() {
    let ui = UiState::default();
    assert!(!ui.sign_in_open);
    assert!(ui.sign_in_error.is_none());
}

#[test]
fn open_sign_in_clears_previous_error() {
    let mut ui = UiState::default();
    ui.open_sign_in();
    ui.reject_sign_in("Enter your name to sign in.");
    assert_eq!(ui.sign_in_error.as_deref(), Some("Enter your name to sign in."));

    ui.close_sign_in();
    ui.open_sign_in();
    assert!(ui.sign_in_open);
    assert!(ui.sign_in_error.is_none());
}

#[test]
fn close_sign_in_hides_modal() {
    let mut ui = UiState::default();
    ui.open_sign_in();
    ui.close_sign_in();
    assert!(!ui.sign_in_open);
}
