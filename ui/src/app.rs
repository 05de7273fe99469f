//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Injected Agent configuration
//! - Global state providers
//! - Routing (the dashboard plus a catch-all 404)

use leptos::*;
use leptos_router::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::AppShell;
use crate::config::AgentConfig;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = AgentConfig::from_document();
    tracing::info!("Agent base URL: {}", config.base_url);

    let app_state = AppState::new(&config);
    provide_context(app_state.clone());

    // One-shot health probe on mount
    create_effect(move |prev_run: Option<bool>| {
        if prev_run.is_some() {
            return true;
        }

        let app_state = app_state.clone();
        spawn_local(async move {
            app_state.refresh_health().await;
        });

        true
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage />
                <Route path="/*" view=NotFoundPage />
            </Routes>
        </Router>
    }
}

/// Dashboard page wrapped in the shell
#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <Dashboard />
        </AppShell>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex items-center justify-center p-6">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-slate-600 mb-4">"404"</h1>
                    <p class="text-xl text-slate-400 mb-6">"Page not found"</p>
                    <a href="/" class="text-blue-400 hover:text-blue-300">"Go to Dashboard"</a>
                </div>
            </div>
        </AppShell>
    }
}
