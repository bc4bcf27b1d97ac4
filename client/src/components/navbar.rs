//! Top navigation bar with section links and sign-in controls.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::nav::NavAction;
use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let learner_name = Memo::new(move |_| session.with(|s| s.learner_name().map(str::to_owned)));
    let go = move |action: NavAction| move |_: leptos::ev::MouseEvent| session.update(|s| s.dispatch(action.clone()));

    let on_sign_in = move |_| ui.update(UiState::open_sign_in);
    let on_logout = move |_| session.update(Session::sign_out);

    view! {
        <nav class="navbar">
            <button class="navbar__brand" on:click=go(NavAction::Home)>"Code4College"</button>
            <div class="navbar__links">
                <button class="navbar__link" on:click=go(NavAction::Home)>"Home"</button>
                <button class="navbar__link" on:click=go(NavAction::TutorialList)>"Tutorials"</button>
                <button class="navbar__link" on:click=go(NavAction::Exercises)>"Exercises"</button>
            </div>
            <div class="navbar__auth">
                {move || match learner_name.get() {
                    Some(name) => view! {
                        <span class="navbar__welcome">{welcome_text(&name)}</span>
                        <button class="btn navbar__logout" on:click=on_logout>"Logout"</button>
                    }
                        .into_any(),
                    None => view! {
                        <button class="btn btn--primary navbar__sign-in" on:click=on_sign_in>"Sign In"</button>
                    }
                        .into_any(),
                }}
            </div>
        </nav>
    }
}

fn welcome_text(name: &str) -> String {
    format!("Welcome, {name}")
}
