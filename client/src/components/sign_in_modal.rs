//! Name-only sign-in dialog.

use leptos::prelude::*;

use crate::state::auth::NAME_REQUIRED_MESSAGE;
use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn SignInModal() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let name = RwSignal::new(String::new());

    let close = move || {
        name.set(String::new());
        ui.update(UiState::close_sign_in);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = session.try_update(|s| s.sign_in(&name.get_untracked())).unwrap_or(false);
        if accepted {
            close();
        } else {
            ui.update(|u| u.reject_sign_in(NAME_REQUIRED_MESSAGE));
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--sign-in" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h2>"Sign In"</h2>
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-form__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {move || {
                        ui.get().sign_in_error.map(|message| view! { <p class="sign-in-form__error">{message}</p> })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit">"Sign In"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
