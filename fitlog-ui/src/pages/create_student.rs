//! Create Student Page
//!
//! Placeholder for the creation route; entries are added through the
//! `fitlog import` command or `POST /save` for now.

use leptos::*;
use leptos_router::*;

#[component]
pub fn CreateStudent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Create Student"</h1>
            <p class="text-gray-400 mb-6">"New entries can't be created from the dashboard yet."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Dashboard"
            </A>
        </div>
    }
}
