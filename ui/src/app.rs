//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Global state providers
//! - Routing
//! - Layout structure with AppShell

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::employees::EmployeesPage;
use crate::components::layout::AppShell;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::default();
    tracing::debug!(
        items_per_page = app_state.config.view.items_per_page,
        page_overflow = ?app_state.config.view.page_overflow,
        "directory configuration loaded"
    );
    provide_context(app_state);

    view! {
        <Title text="Personnel" />
        <Router>
            <AppShell>
                <Routes>
                    <Route path="/" view=DirectoryPage />
                    <Route path="/employees" view=DirectoryPage />

                    // Catch-all for 404
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </AppShell>
        </Router>
    }
}

#[component]
fn DirectoryPage() -> impl IntoView {
    view! {
        <Title text="All Employees | Personnel" />
        <EmployeesPage />
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <h1 class="text-4xl font-bold mb-2">"404"</h1>
            <p class="opacity-70 mb-6">"This page does not exist."</p>
            <A href="/" class="text-purple-600 hover:underline">"Back to the directory"</A>
        </div>
    }
}
