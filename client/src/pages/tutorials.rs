//! Tutorial index grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The index is owned by whichever component mounted it (this page or the
//! ticker). [`load_index`] writes into that component's signal only while the
//! component is still alive.

use leptos::prelude::*;

use crate::net::error::INDEX_UNAVAILABLE_MESSAGE;
use crate::state::nav::NavAction;
use crate::state::session::Session;
use crate::state::tutorial::IndexLoad;

/// Fetch the tutorial index into `target`, scoped to the calling component.
pub(crate) fn load_index(target: RwSignal<IndexLoad>) {
    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_tutorial_index(&config).await;
            if let Err(e) = &result {
                leptos::logging::warn!("tutorial index fetch failed: {e}");
            }
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                target.try_set(IndexLoad::from_result(result));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}

#[component]
pub fn TutorialsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let index = RwSignal::new(IndexLoad::default());
    load_index(index);

    view! {
        <div class="tutorials-page">
            {move || match index.get() {
                IndexLoad::Loading => view! { <div class="page-status">"Loading tutorials..."</div> }.into_any(),
                IndexLoad::Failed(_) => {
                    view! { <div class="page-status page-status--error">{INDEX_UNAVAILABLE_MESSAGE}</div> }.into_any()
                }
                IndexLoad::Ready(entries) => view! {
                    <h1>"All Tutorials"</h1>
                    <p class="tutorials-page__subtitle">"Select a topic to start learning."</p>
                    <div class="tutorials-grid">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                let on_click = move |_| {
                                    session.update(|s| s.dispatch(NavAction::Tutorial(id.clone())));
                                };
                                view! {
                                    <div class="tutorials-grid__card" on:click=on_click>
                                        <h2>{entry.title}</h2>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
