//! User Registrar Component
//!
//! Registers a dummy user against the Agent. Success clears the form;
//! failure keeps it populated so the user can retry manually.

use leptos::*;

use crate::client::AgentApi;
use crate::components::common::UserPlusIcon;
use crate::state::{AppState, RegistrarState};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 \
                           text-white text-sm placeholder-slate-500 focus:outline-none \
                           focus:ring-2 focus:ring-green-500";

/// User registration form
#[component]
pub fn UserRegistrar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (state, set_state) = create_signal(RegistrarState::default());

    let on_submit = move |_| {
        let client = app_state.client.clone();
        let request = state.get().form.to_request();

        spawn_local(async move {
            let outcome = client.register_user(&request).await;
            set_state.update(|s| s.finish_submit(outcome));
        });
    };

    view! {
        <div class="bg-slate-800 p-6 rounded-xl border border-slate-700 space-y-4">
            <input
                type="text"
                class=INPUT_CLASS
                placeholder="Name"
                prop:value=move || state.get().form.name
                on:input=move |e| set_state.update(|s| s.form.name = event_target_value(&e))
            />
            <input
                type="text"
                class=INPUT_CLASS
                placeholder="License Plate"
                prop:value=move || state.get().form.plate
                on:input=move |e| set_state.update(|s| s.form.plate = event_target_value(&e))
            />
            <input
                type="text"
                class=INPUT_CLASS
                placeholder="Email"
                prop:value=move || state.get().form.email
                on:input=move |e| set_state.update(|s| s.form.email = event_target_value(&e))
            />

            <button
                class="w-full flex items-center justify-center gap-2 px-4 py-2 bg-green-600 hover:bg-green-700 \
                       text-white font-medium rounded-lg transition-colors"
                on:click=on_submit
            >
                <UserPlusIcon class="w-4 h-4" />
                "Save User"
            </button>

            {move || state.get().message.map(|msg| view! {
                <p class=msg.text_class()>{msg.label()}</p>
            })}
        </div>
    }
}
