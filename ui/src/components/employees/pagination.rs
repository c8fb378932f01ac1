//! Numbered pagination controls

use leptos::*;
use personnel_shared::ViewModel;

use crate::state::DirectoryState;

const NAV_ENABLED: &str = "bg-purple-600 text-white hover:bg-purple-700";
const NAV_DISABLED: &str = "bg-gray-300 text-gray-500 cursor-not-allowed";

/// Previous / 1..N / Next
#[component]
pub fn PaginationControls(directory: DirectoryState, view_model: Memo<ViewModel>) -> impl IntoView {
    view! {
        <nav class="pagination flex justify-center mt-6">
            <ul class="flex space-x-2">
                <li>
                    <button
                        class=move || format!(
                            "px-4 py-2 rounded {}",
                            if view_model.with(ViewModel::has_prev) { NAV_ENABLED } else { NAV_DISABLED }
                        )
                        disabled=move || !view_model.with(ViewModel::has_prev)
                        on:click=move |_| directory.prev_page()
                    >
                        "Previous"
                    </button>
                </li>

                {move || {
                    let current = view_model.with(|v| v.current_page);
                    view_model.with(ViewModel::page_numbers).into_iter().map(|number| {
                        let class = if number == current {
                            "page-number px-4 py-2 rounded bg-purple-700 text-white"
                        } else {
                            "page-number px-4 py-2 rounded bg-gray-200 text-gray-700 hover:bg-purple-100"
                        };
                        view! {
                            <li>
                                <button class=class on:click=move |_| directory.go_to_page(number)>
                                    {number}
                                </button>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }}

                <li>
                    <button
                        class=move || format!(
                            "px-4 py-2 rounded {}",
                            if view_model.with(ViewModel::has_next) { NAV_ENABLED } else { NAV_DISABLED }
                        )
                        disabled=move || !view_model.with(ViewModel::has_next)
                        on:click=move |_| directory.next_page()
                    >
                        "Next"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
