//! Tutorial detail page: lesson body, live editor, and output pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page mounts once per navigation. On mount it takes a fetch ticket from
//! the session and spawns the detail request; the session decides whether
//! the result still applies when it arrives.

use leptos::prelude::*;

use crate::components::output_pane::OutputPane;
use crate::state::nav::{CourseTitle, NavAction};
use crate::state::session::Session;
use crate::state::tutorial::{FetchTicket, LoadPhase};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn TutorialPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let nav_seq = Memo::new(move |_| session.with(Session::nav_seq));
    Effect::new(move || {
        nav_seq.track();
        if let Some(ticket) = session.try_update(Session::begin_tutorial_fetch).flatten() {
            spawn_detail_fetch(session, ticket);
        }
    });

    let phase = Memo::new(move |_| session.with(|s| s.tutorial().phase()));
    let signed_in = Memo::new(move |_| session.with(|s| s.learner().is_some()));
    let lesson_html = Memo::new(move |_| {
        session.with(|s| s.tutorial().detail().map(|d| render_markdown_html(&d.content)).unwrap_or_default())
    });
    let certificate_title = Memo::new(move |_| {
        session.with(|s| s.tutorial().detail().and_then(|d| CourseTitle::new(d.title.clone())))
    });
    let code = Memo::new(move |_| session.with(|s| s.editor().map(|e| e.text().to_owned()).unwrap_or_default()));
    let preview = Memo::new(move |_| session.with(Session::preview));

    let on_back = move |_| session.update(|s| s.dispatch(NavAction::BackToList));
    let on_reset = move |_| session.update(Session::reset_code);

    view! {
        <div class="tutorial-page">
            {move || match phase.get() {
                LoadPhase::Idle | LoadPhase::Loading => {
                    view! { <div class="page-status">"Loading tutorial..."</div> }.into_any()
                }
                LoadPhase::Failed(message) => {
                    view! { <div class="page-status page-status--error">{message}</div> }.into_any()
                }
                LoadPhase::Ready => view! {
                    <div class="tutorial-page__actions">
                        <button class="btn" on:click=on_back>"← Back to All Tutorials"</button>
                        {move || {
                            certificate_title
                                .get()
                                .filter(|_| signed_in.get())
                                .map(|title| {
                                    let on_certificate = move |_| {
                                        session.update(|s| s.dispatch(NavAction::Certificate(title.clone())));
                                    };
                                    view! {
                                        <button class="btn btn--success" on:click=on_certificate>"Get Certificate"</button>
                                    }
                                })
                        }}
                    </div>
                    <article class="tutorial-page__lesson markdown-body" inner_html=move || lesson_html.get()></article>
                    <div class="tutorial-page__workspace">
                        <div class="editor">
                            <div class="editor__header">
                                <span>"Live Editor"</span>
                                <button class="btn btn--small" on:click=on_reset>"Reset"</button>
                            </div>
                            <textarea
                                class="editor__input"
                                spellcheck="false"
                                aria-label="Live Code Editor"
                                prop:value=move || code.get()
                                on:input=move |ev| session.update(|s| s.edit_code(event_target_value(&ev)))
                            ></textarea>
                        </div>
                        <OutputPane output=preview/>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}

fn spawn_detail_fetch(session: RwSignal<Session>, ticket: FetchTicket) {
    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_tutorial_detail(&config, ticket.topic_id()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("tutorial {} fetch failed: {e}", ticket.topic_id());
            }
            session.try_update(|s| s.finish_tutorial_fetch(&ticket, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, ticket);
    }
}
