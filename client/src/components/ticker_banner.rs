//! Scrolling banner listing every available tutorial.
//!
//! A failed index fetch is logged and leaves the banner empty.

use leptos::prelude::*;

use crate::pages::tutorials::load_index;
use crate::state::nav::NavAction;
use crate::state::session::Session;
use crate::state::tutorial::IndexLoad;

#[component]
pub fn TickerBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let index = RwSignal::new(IndexLoad::default());
    load_index(index);

    view! {
        <div class="ticker">
            <div class="ticker__track">
                {move || {
                    index
                        .get()
                        .entries()
                        .iter()
                        .map(|entry| {
                            let id = entry.id.clone();
                            let on_click = move |_| session.update(|s| s.dispatch(NavAction::Tutorial(id.clone())));
                            view! {
                                <button class="ticker__item" on:click=on_click>{entry.title.clone()}</button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
