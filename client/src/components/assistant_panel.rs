//! Floating code assistant: launcher button plus chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Conversation state lives in the session. This component only schedules
//! the typing delay; a reply is handed back through
//! [`Session::deliver_reply`], which drops it when the panel was closed or
//! the topic changed in the meantime.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::assistant::{PendingReply, Sender, TypingDelay};
use crate::state::session::Session;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssistantLauncher() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let open = Memo::new(move |_| session.with(|s| s.assistant().is_open()));

    view! {
        <button
            class="assistant-launcher"
            class:assistant-launcher--open=move || open.get()
            title="Code Assistant"
            on:click=move |_| session.update(Session::toggle_assistant)
        >
            {move || if open.get() { "✕" } else { "💬" }}
        </button>
    }
}

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let delay = config.typing_delay();
    let input = RwSignal::new(String::new());

    let messages = Memo::new(move |_| session.with(|s| s.assistant().log().messages().to_vec()));
    let typing = Memo::new(move |_| session.with(|s| s.assistant().is_typing()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let pending = session.try_update(|s| s.submit_to_assistant(&text)).flatten();
        if let Some(reply) = pending {
            input.set(String::new());
            schedule_reply(session, reply, delay);
        }
    };

    view! {
        <aside class="assistant-panel">
            <header class="assistant-panel__header">
                <span class="assistant-panel__title">"Code Assistant"</span>
                <button class="assistant-panel__close" title="Close" on:click=move |_| session.update(Session::close_assistant)>
                    "✕"
                </button>
            </header>
            <div class="assistant-panel__messages">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| match message.sender {
                            Sender::User => view! {
                                <div class="assistant-panel__message assistant-panel__message--user">{message.text}</div>
                            }
                                .into_any(),
                            Sender::Assistant => {
                                let rendered = render_markdown_html(&message.text);
                                view! {
                                    <div
                                        class="assistant-panel__message assistant-panel__message--assistant"
                                        inner_html=rendered
                                    ></div>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || typing.get().then(|| view! { <div class="assistant-panel__typing">"Typing..."</div> })}
            </div>
            <form class="assistant-panel__input-row" on:submit=on_submit>
                <input
                    class="assistant-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || typing.get()>"Send"</button>
            </form>
        </aside>
    }
}

/// Deliver `reply` after the typing delay.
fn schedule_reply(session: RwSignal<Session>, reply: PendingReply, delay: TypingDelay) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay.as_duration()).await;
        let delivered = session.try_update(|s| s.deliver_reply(reply)).unwrap_or(false);
        if !delivered {
            leptos::logging::log!("assistant reply dropped after conversation reset");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, reply, delay);
    }
}
