//! Search box, filter toggle and filter panel

use leptos::*;
use personnel_shared::ViewModel;

use crate::components::common::{FilterIcon, SearchIcon};
use crate::state::{AppState, DirectoryState};

/// Search input with the button that opens the filter panel
#[component]
pub fn SearchBar(directory: DirectoryState) -> impl IntoView {
    let theme = expect_context::<AppState>().theme;

    view! {
        <div class=move || format!(
            "flex flex-wrap items-center justify-between border rounded-xl shadow-sm px-4 py-3 mb-6 {}",
            theme.get().surface_class()
        )>
            // Search Input
            <div class="relative flex-1 min-w-[220px] max-w-[400px]">
                <input
                    type="text"
                    class="search-input w-full pl-10 pr-4 py-2.5 bg-gray-50 border border-gray-200 \
                           rounded-lg focus:ring-2 focus:ring-purple-400 focus:outline-none \
                           placeholder-gray-400 text-gray-700"
                    placeholder="Search employee..."
                    prop:value=move || directory.filters.with(|f| f.search_term.clone())
                    on:input=move |e| directory.set_search(event_target_value(&e))
                />
                <SearchIcon class="w-5 h-5 text-gray-400 absolute left-3 top-2.5" />
            </div>

            // Filter Button
            <div class="flex items-center gap-2 mt-3 sm:mt-0">
                <button
                    class=move || {
                        let base = "filter-toggle flex items-center gap-2 border px-4 py-2.5 \
                                    rounded-lg shadow-sm transition-all duration-200";
                        if directory.show_filter.get() {
                            format!("{} bg-purple-50 border-purple-300 text-purple-700", base)
                        } else {
                            format!("{} bg-gray-50 hover:bg-gray-100 border-gray-200 text-gray-700", base)
                        }
                    }
                    on:click=move |_| directory.toggle_filter_panel()
                >
                    <FilterIcon class="w-4 h-4 text-gray-500" />
                    <span class="font-medium">"Filter"</span>
                </button>
            </div>
        </div>
    }
}

/// Department, gender and role selectors
#[component]
pub fn FilterPanel(directory: DirectoryState, view_model: Memo<ViewModel>) -> impl IntoView {
    let theme = expect_context::<AppState>().theme;

    view! {
        <div class=move || format!(
            "filter-panel rounded-lg shadow-md p-4 mb-6 border {}",
            theme.get().surface_class()
        )>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <FilterSelect
                    label="Department"
                    options=Signal::derive(move || view_model.with(|v| v.department_options.clone()))
                    selected=Signal::derive(move || directory.filters.with(|f| f.department.clone()))
                    on_change=Callback::new(move |value: String| directory.set_department(value))
                />
                <FilterSelect
                    label="Gender"
                    options=Signal::derive(move || view_model.with(|v| v.gender_options.clone()))
                    selected=Signal::derive(move || directory.filters.with(|f| f.gender.clone()))
                    on_change=Callback::new(move |value: String| directory.set_gender(value))
                />
                <FilterSelect
                    label="Role"
                    options=Signal::derive(move || view_model.with(|v| v.role_options.clone()))
                    selected=Signal::derive(move || directory.filters.with(|f| f.role.clone()))
                    on_change=Callback::new(move |value: String| directory.set_role(value))
                />
            </div>
        </div>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    options: Signal<Vec<String>>,
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block font-medium mb-1">{label}</label>
            <select
                class="w-full border border-gray-300 rounded-lg px-3 py-2 text-gray-700 \
                       focus:ring-2 focus:ring-purple-400 focus:outline-none"
                prop:value=move || selected.get()
                on:change=move |e| on_change.call(event_target_value(&e))
            >
                {move || {
                    let current = selected.get();
                    options.get().into_iter().map(|option| {
                        let is_selected = option == current;
                        view! {
                            <option value=option.clone() selected=is_selected>{option}</option>
                        }
                    }).collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}
