//! App Shell Component
//!
//! Page chrome: header, scrollable content area, status bar.

use leptos::*;

use super::StatusBar;

/// Main application shell layout
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="h-screen flex flex-col bg-slate-900 text-white overflow-hidden">
            <header class="flex items-center justify-between px-6 py-4 bg-slate-800 border-b border-slate-700 flex-shrink-0">
                <h1 class="text-2xl font-bold text-white">"TrafficWatch"</h1>
                <p class="text-slate-400">"AI-powered violation detection"</p>
            </header>

            <main class="flex-1 overflow-auto">
                {children()}
            </main>

            <StatusBar />
        </div>
    }
}
