//! Image Analyzer Component
//!
//! Accepts an image URL, submits it for remote analysis, and renders the
//! returned payload verbatim. Overlapping submissions are not cancelled;
//! the last response to resolve wins.

use leptos::*;

use crate::client::AgentApi;
use crate::components::common::CameraIcon;
use crate::state::{AnalyzerState, AppState};

/// Image analysis form and result view
#[component]
pub fn ImageAnalyzer() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (state, set_state) = create_signal(AnalyzerState::default());

    let on_submit = move |_| {
        let client = app_state.client.clone();
        let mut url = String::new();
        set_state.update(|s| url = s.begin_submit());

        spawn_local(async move {
            let outcome = client.analyze_url(&url).await;
            set_state.update(|s| s.finish_submit(outcome));
        });
    };

    let rendered_analysis = move || {
        state.get().analysis.map(|payload| {
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
        })
    };

    view! {
        <div class="bg-slate-800 p-6 rounded-xl border border-slate-700 space-y-3">
            <input
                type="text"
                class="w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                       placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Paste image URL..."
                prop:value=move || state.get().image_url
                on:input=move |e| set_state.update(|s| s.image_url = event_target_value(&e))
            />

            <button
                class="w-full flex items-center justify-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                       text-white font-medium rounded-lg transition-colors disabled:opacity-50"
                disabled=move || state.get().submitting
                on:click=on_submit
            >
                <CameraIcon class="w-4 h-4" />
                {move || if state.get().submitting { "Analyzing..." } else { "Analyze Image" }}
            </button>

            {move || rendered_analysis().map(|text| view! {
                <pre class="bg-slate-900 border border-slate-700 p-3 rounded-lg overflow-x-auto text-sm text-slate-300">
                    {text}
                </pre>
            })}
        </div>
    }
}
