//! Live preview pane for the tutorial editor.
//!
//! Markup is rendered inside a sandboxed `<iframe srcdoc>` whose sandbox
//! attribute comes from [`LEARNER_MARKUP_SANDBOX`]; every other language gets
//! its simulated transcript in a `<pre>`.

use leptos::prelude::*;

use crate::state::preview::{LEARNER_MARKUP_SANDBOX, PreviewOutput};

#[component]
pub fn OutputPane(#[prop(into)] output: Signal<Option<PreviewOutput>>) -> impl IntoView {
    view! {
        <div class="output-pane">
            <h3 class="output-pane__title">"Output"</h3>
            {move || match output.get() {
                Some(PreviewOutput::SandboxedMarkup(markup)) => view! {
                    <iframe
                        class="output-pane__frame"
                        title="Live Preview"
                        sandbox=LEARNER_MARKUP_SANDBOX.attribute()
                        srcdoc=markup
                    ></iframe>
                }
                    .into_any(),
                Some(transcript @ PreviewOutput::SimulatedTranscript(_)) => view! {
                    <pre class="output-pane__transcript">{transcript.transcript_text().unwrap_or_default()}</pre>
                }
                    .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
