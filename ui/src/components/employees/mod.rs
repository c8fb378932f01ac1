//! Employee Directory
//!
//! The "All Employees" page:
//! - One fetch of the personnel collection on mount
//! - Search box plus a collapsible department/gender/role filter panel
//! - Card grid of the current page with numbered pagination
//!
//! All derived data (options, filtered list, page window) comes from
//! [`DirectoryState::view`] and is recomputed whenever an input changes.

mod employee_cards;
mod filter_bar;
mod pagination;

pub use employee_cards::EmployeeCards;
pub use filter_bar::{FilterPanel, SearchBar};
pub use pagination::PaginationControls;

use leptos::*;
use personnel_shared::{LoadPhase, ViewModel};

use crate::components::common::{Loading, PersonAddIcon, UsersIcon};
use crate::state::{AppState, DirectoryState};

// ============================================================================
// Main Component
// ============================================================================

/// Directory page listing every employee
#[component]
pub fn EmployeesPage(
    /// Invoked by the "Add New Personnel" button; the creation flow lives elsewhere
    #[prop(optional)]
    on_add_personnel: Option<Callback<()>>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let directory = DirectoryState::new(&app_state.config.view);

    // Fetch once on mount
    {
        let source = app_state.source();
        create_effect(move |prev_run: Option<()>| {
            if prev_run.is_some() {
                return;
            }
            let source = source.clone();
            spawn_local(async move {
                directory.load(source.as_ref()).await;
            });
        });
    }

    let view_model = create_memo(move |_| directory.view());
    let theme = app_state.theme;

    view! {
        <div class=move || format!(
            "min-h-screen py-8 px-6 transition-colors duration-300 {}",
            theme.get().page_class()
        )>
            {move || match directory.phase.get() {
                LoadPhase::Loading => view! { <Loading /> }.into_view(),
                LoadPhase::Failed(message) => view! {
                    <div class="fetch-error text-center text-red-500 text-lg py-10">{message}</div>
                }.into_view(),
                LoadPhase::Ready => view! {
                    <DirectoryBody
                        directory=directory
                        view_model=view_model
                        on_add_personnel=on_add_personnel
                    />
                }.into_view(),
            }}
        </div>
    }
}

// ============================================================================
// Loaded Directory
// ============================================================================

#[component]
fn DirectoryBody(
    directory: DirectoryState,
    view_model: Memo<ViewModel>,
    on_add_personnel: Option<Callback<()>>,
) -> impl IntoView {
    let on_add = move |_| match on_add_personnel {
        Some(callback) => callback.call(()),
        None => tracing::debug!("no add-personnel handler registered"),
    };

    view! {
        // Header: Title + Add Button
        <div class="flex flex-wrap items-center justify-between mb-6">
            <h2 class="text-2xl font-semibold">"All Employees"</h2>

            <button
                class="flex items-center gap-2 bg-gradient-to-r from-purple-600 to-indigo-600 \
                       text-white px-5 py-2.5 rounded-xl shadow-md hover:shadow-lg \
                       hover:scale-105 transition-all duration-300"
                on:click=on_add
            >
                <PersonAddIcon class="w-5 h-5" />
                <span class="font-medium">"Add New Personnel"</span>
            </button>
        </div>

        <SearchBar directory=directory />

        <Show when=move || directory.show_filter.get()>
            <FilterPanel directory=directory view_model=view_model />
        </Show>

        {move || {
            if view_model.with(ViewModel::is_empty) {
                view! { <EmptyState /> }.into_view()
            } else {
                view! {
                    <EmployeeCards employees=Signal::derive(move || view_model.with(|v| v.items.clone())) />
                    <PaginationControls directory=directory view_model=view_model />
                }.into_view()
            }
        }}
    }
}

/// Shown when nothing passes the filters
#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state flex flex-col items-center py-16 text-center text-lg">
            <UsersIcon class="w-12 h-12 mb-3 opacity-40" />
            "No employees found."
        </div>
    }
}
