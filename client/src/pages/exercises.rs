//! Placeholder for the upcoming exercises section.

use leptos::prelude::*;

#[component]
pub fn ExercisesPage() -> impl IntoView {
    view! {
        <div class="exercises-page">
            <h1>"Coding Exercises"</h1>
            <p>"This section is under construction."</p>
            <p class="exercises-page__hint">"Come back soon to test your skills!"</p>
        </div>
    }
}
