//! App Shell Component
//!
//! Main layout container: a slim top bar with the product name and the
//! theme switch, followed by the page content.

use leptos::*;

use crate::components::common::{MoonIcon, SunIcon, UsersIcon};
use crate::state::{AppState, Theme};

/// Main application shell layout
#[component]
pub fn AppShell(
    /// Page content (routes)
    children: Children,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Apply theme class to html element
    create_effect(move |_| {
        let theme = app_state.theme.get();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(html) = document.document_element() {
                let _ = html.class_list().remove_2(Theme::Light.root_class(), Theme::Dark.root_class());
                let _ = html.class_list().add_1(theme.root_class());
            }
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <TopBar />
            <main class="flex-1">
                {children()}
            </main>
        </div>
    }
}

/// Product name and theme switch
#[component]
fn TopBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let theme = app_state.theme;

    view! {
        <header class=move || format!(
            "h-14 border-b flex items-center px-6 gap-3 {}",
            theme.get().surface_class()
        )>
            <UsersIcon class="w-6 h-6 text-purple-600" />
            <span class="font-bold text-lg">"Personnel"</span>

            // Spacer
            <div class="flex-1" />

            <button
                class="p-2 rounded-lg hover:bg-gray-500/10 transition-colors"
                title=move || match theme.get() {
                    Theme::Light => "Switch to dark theme",
                    Theme::Dark => "Switch to light theme",
                }
                on:click=move |_| app_state.toggle_theme()
            >
                {move || match theme.get() {
                    Theme::Light => view! { <MoonIcon class="w-5 h-5" /> }.into_view(),
                    Theme::Dark => view! { <SunIcon class="w-5 h-5" /> }.into_view(),
                }}
            </button>
        </header>
    }
}
