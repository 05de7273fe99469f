//! Dashboard Components
//!
//! The single dashboard page: violations grid, image analyzer, and user
//! registration. The three sections talk to the Agent independently; no
//! state is shared between them and a failure in one never affects the
//! others.

use leptos::*;

mod image_analyzer;
mod user_registrar;
mod violations_list;

pub use image_analyzer::ImageAnalyzer;
pub use user_registrar::UserRegistrar;
pub use violations_list::ViolationsList;

/// Main dashboard view
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="p-6">
            <div class="max-w-7xl mx-auto space-y-10">
                <section>
                    <h2 class="text-xl font-semibold text-white mb-4">"Recent Violations"</h2>
                    <ViolationsList />
                </section>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <section>
                        <h2 class="text-xl font-semibold text-white mb-4">"Analyze an Image"</h2>
                        <ImageAnalyzer />
                    </section>

                    <section>
                        <h2 class="text-xl font-semibold text-white mb-4">"Register a User"</h2>
                        <UserRegistrar />
                    </section>
                </div>
            </div>
        </div>
    }
}
