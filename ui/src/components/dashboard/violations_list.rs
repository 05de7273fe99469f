//! Violations List Component
//!
//! Read-only grid of violation records. One load request on first
//! display; a failed load is logged and rendered as the empty state.

use leptos::*;
use trafficwatch_shared::Violation;

use crate::client::AgentApi;
use crate::components::common::ShieldIcon;
use crate::state::{AppState, ViolationsState};

/// Severity badge styling, thresholded for display only
fn severity_class(score: f64) -> &'static str {
    if score >= 7.0 {
        "bg-red-500/20 text-red-400"
    } else if score >= 4.0 {
        "bg-amber-500/20 text-amber-400"
    } else {
        "bg-green-500/20 text-green-400"
    }
}

/// Yes/No rendering for a category flag
fn flag_text(active: bool) -> &'static str {
    if active {
        "Yes"
    } else {
        "No"
    }
}

fn flag_class(active: bool) -> &'static str {
    if active {
        "text-red-400"
    } else {
        "text-green-400"
    }
}

/// Violations grid with loading and empty states
#[component]
pub fn ViolationsList() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (state, set_state) = create_signal(ViolationsState::default());

    // Fetch violations on mount
    create_effect(move |_| {
        let client = app_state.client.clone();
        spawn_local(async move {
            let outcome = client.violations().await;
            set_state.update(|s| s.finish_load(outcome));
        });
    });

    view! {
        <Show
            when=move || !state.get().loading
            fallback=|| view! { <p class="text-slate-400">"Loading violations..."</p> }
        >
            <Show
                when=move || !state.get().is_empty()
                fallback=|| view! {
                    <div class="flex flex-col items-center py-12 bg-slate-800 rounded-xl border border-slate-700">
                        <ShieldIcon class="w-8 h-8 text-slate-500 mb-3" />
                        <p class="text-slate-400">"No violations logged yet."</p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {move || {
                        state
                            .get()
                            .records
                            .into_iter()
                            .map(|v| view! { <ViolationCard violation=v /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </Show>
    }
}

/// A single violation record
#[component]
fn ViolationCard(violation: Violation) -> impl IntoView {
    let flags = violation.category_flags();
    let severity = violation.severity_score;
    let plate = violation.plate_label().to_string();
    let summary = violation.summary.clone();
    let vehicle = violation.vehicle_type.clone();
    let observed = violation
        .timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    view! {
        <div class="p-4 bg-slate-800 rounded-xl border border-slate-700">
            <div class="flex items-center justify-between">
                <p class="font-bold text-lg text-white">"Plate: " {plate}</p>
                <span class=format!(
                    "px-2.5 py-0.5 rounded-full text-xs font-medium {}",
                    severity_class(severity)
                )>
                    {format!("Severity {:.1}", severity)}
                </span>
            </div>

            <p class="text-slate-400 text-sm mt-1">{summary}</p>

            {vehicle.map(|v| view! {
                <p class="text-xs text-slate-500 mt-1">"Vehicle: " {v}</p>
            })}
            {observed.map(|t| view! {
                <p class="text-xs text-slate-500 mt-1">"Observed: " {t}</p>
            })}

            <div class="mt-3 text-sm grid grid-cols-2 gap-2">
                {flags
                    .into_iter()
                    .map(|flag| view! {
                        <p class=flag_class(flag.active)>
                            {flag.label} ": " {flag_text(flag.active)}
                        </p>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(severity_class(9.0), severity_class(7.0));
        assert_eq!(severity_class(6.9), severity_class(4.0));
        assert_eq!(severity_class(3.9), severity_class(0.0));
        assert_ne!(severity_class(7.0), severity_class(4.0));
        assert_ne!(severity_class(4.0), severity_class(0.0));
    }

    #[test]
    fn test_flag_rendering() {
        assert_eq!(flag_text(true), "Yes");
        assert_eq!(flag_text(false), "No");
        assert_ne!(flag_class(true), flag_class(false));
    }
}
