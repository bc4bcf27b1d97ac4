//! Certificate of completion.
//!
//! Access is gated on a signed-in learner; without one the page explains why
//! and offers a way back home.

use leptos::prelude::*;

use crate::state::nav::NavAction;
use crate::state::session::{CertificateAccess, Session};
use crate::util::date;

#[component]
pub fn CertificatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let access = Memo::new(move |_| session.with(Session::certificate_access));

    // Filled in after hydration so server and browser markup agree.
    let completion_date = RwSignal::new(None::<String>);
    Effect::new(move || completion_date.set(date::today()));

    let go_home = move |_| session.update(|s| s.dispatch(NavAction::Home));
    let go_back = move |_| session.update(|s| s.dispatch(NavAction::BackToList));

    view! {
        <div class="certificate-page">
            {move || match access.get() {
                CertificateAccess::Denied => view! {
                    <div class="certificate-page__denied">
                        <h1>"Please log in to view your certificate."</h1>
                        <button class="btn btn--primary" on:click=go_home>"Go to Home"</button>
                    </div>
                }
                    .into_any(),
                CertificateAccess::Granted { learner_name, title } => view! {
                    <div class="certificate-page__actions">
                        <button class="btn" on:click=go_back>"← Back to All Tutorials"</button>
                    </div>
                    <div class="certificate">
                        <h1 class="certificate__heading">"Certificate of Completion"</h1>
                        <p>"This certificate is proudly presented to"</p>
                        <p class="certificate__name">{learner_name}</p>
                        <p>"for successfully completing the course"</p>
                        <p class="certificate__course">{title.as_str().to_owned()}</p>
                        <p class="certificate__date">
                            {move || completion_date.get().map(|d| format!("on {d}")).unwrap_or_default()}
                        </p>
                        <div class="certificate__footer">
                            <p class="certificate__brand">"Code4College"</p>
                            <p class="certificate__tagline">"An Online Learning Platform"</p>
                        </div>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
