//! Root application component and the SSR HTML shell.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::assistant_panel::{AssistantLauncher, AssistantPanel};
use crate::components::navbar::Navbar;
use crate::components::sign_in_modal::SignInModal;
use crate::components::ticker_banner::TickerBanner;
use crate::config::{ClientConfig, META_NAME};
use crate::pages::{
    certificate::CertificatePage, exercises::ExercisesPage, home::HomePage, tutorial::TutorialPage,
    tutorials::TutorialsPage,
};
use crate::state::knowledge::KnowledgeBase;
use crate::state::nav::View;
use crate::state::session::Session;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as a `<meta>` tag so `hydrate()` starts from the same
/// values the server rendered with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let meta_content = config.to_meta_content();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=meta_content/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI chrome state, and client config as contexts and
/// swaps the page whenever the session navigates.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::new(Arc::new(KnowledgeBase::load_or_fallback())));
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    // nav_seq is part of the key so re-entering an equal view remounts the page.
    let page = Memo::new(move |_| session.with(|s| (s.view().clone(), s.nav_seq())));
    let assistant_open = Memo::new(move |_| session.with(|s| s.assistant().is_open()));
    let sign_in_open = Memo::new(move |_| ui.with(|u| u.sign_in_open));

    view! {
        <Stylesheet id="leptos" href="/pkg/code4college.css"/>
        <Title text="Code4College"/>

        <Navbar/>
        <TickerBanner/>
        <main class="page">
            {move || match page.get().0 {
                View::Home => view! { <HomePage/> }.into_any(),
                View::TutorialList => view! { <TutorialsPage/> }.into_any(),
                View::TutorialDetail { .. } => view! { <TutorialPage/> }.into_any(),
                View::Exercises => view! { <ExercisesPage/> }.into_any(),
                View::Certificate { .. } => view! { <CertificatePage/> }.into_any(),
            }}
        </main>
        <Show when=move || sign_in_open.get()>
            <SignInModal/>
        </Show>
        <Show when=move || assistant_open.get()>
            <AssistantPanel/>
        </Show>
        <AssistantLauncher/>
    }
}
