//! Status Bar Component
//!
//! Bottom status bar showing Agent connectivity and the dashboard version.

use leptos::*;

use crate::state::AppState;

/// Status bar at the bottom of the screen
#[component]
pub fn StatusBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let status_label = move || match app_state.agent_online.get() {
        Some(true) => "Connected",
        Some(false) => "Agent offline",
        None => "Checking...",
    };

    view! {
        <footer class="h-6 flex items-center justify-between px-3 bg-slate-900 border-t border-slate-700 text-xs text-slate-500 flex-shrink-0">
            // Connection indicator
            <div class="flex items-center gap-1.5">
                <div class=move || {
                    let base = "w-2 h-2 rounded-full";
                    match app_state.agent_online.get() {
                        Some(true) => format!("{} bg-green-500", base),
                        Some(false) => format!("{} bg-red-500", base),
                        None => format!("{} bg-slate-500", base),
                    }
                } />
                <span>{status_label}</span>
            </div>

            <span>"TrafficWatch v0.1.0"</span>
        </footer>
    }
}
