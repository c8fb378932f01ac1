//! Loading Indicator

use leptos::*;

/// Centered spinner shown while data is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16" role="status">
            <div class="loading-spinner animate-spin w-8 h-8 border-4 border-purple-500 border-t-transparent rounded-full" />
        </div>
    }
}
