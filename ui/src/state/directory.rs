//! Directory Page State
//!
//! Reactive inputs of the directory page. The derived view is never stored;
//! [`DirectoryState::view`] recomputes it from the current inputs.

use leptos::*;
use personnel_shared::{
    derive_view, Employee, FilterState, LoadPhase, PageOverflow, PageState, ViewConfig, ViewModel,
};

use crate::client::EmployeeSource;

/// State owned by one directory page instance
#[derive(Clone, Copy)]
pub struct DirectoryState {
    /// Employees from the initial fetch
    pub employees: RwSignal<Vec<Employee>>,

    /// Loading → Failed | Ready
    pub phase: RwSignal<LoadPhase>,

    pub filters: RwSignal<FilterState>,
    pub page: RwSignal<PageState>,

    /// Whether the department/gender/role panel is open
    pub show_filter: RwSignal<bool>,

    overflow: PageOverflow,
}

impl DirectoryState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            employees: create_rw_signal(Vec::new()),
            phase: create_rw_signal(LoadPhase::Loading),
            filters: create_rw_signal(FilterState::default()),
            page: create_rw_signal(config.initial_page()),
            show_filter: create_rw_signal(false),
            overflow: config.page_overflow,
        }
    }

    /// Fetch the employee collection once and settle the load phase
    pub async fn load(&self, source: &dyn EmployeeSource) {
        match source.fetch_employees().await {
            Ok(employees) => {
                tracing::info!(count = employees.len(), "loaded personnel");
                self.employees.set(employees);
                self.phase.set(LoadPhase::Ready);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch personnel");
                self.phase.set(LoadPhase::fetch_failed());
            }
        }
    }

    /// Derived view for the current inputs (tracked)
    pub fn view(&self) -> ViewModel {
        let page = self.page.get();
        self.employees
            .with(|employees| self.filters.with(|filters| derive_view(employees, filters, &page)))
    }

    pub fn set_search(&self, term: String) {
        self.update_filters(|f| f.search_term = term);
    }

    pub fn set_department(&self, department: String) {
        self.update_filters(|f| f.department = department);
    }

    pub fn set_gender(&self, gender: String) {
        self.update_filters(|f| f.gender = gender);
    }

    pub fn set_role(&self, role: String) {
        self.update_filters(|f| f.role = role);
    }

    pub fn toggle_filter_panel(&self) {
        self.show_filter.update(|open| *open = !*open);
    }

    pub fn go_to_page(&self, page: usize) {
        self.page.update(|p| p.go_to(page));
    }

    pub fn prev_page(&self) {
        self.page.update(PageState::prev);
    }

    pub fn next_page(&self) {
        let total_pages = self
            .page
            .with_untracked(|p| p.total_pages(self.filtered_count_untracked()));
        self.page.update(|p| p.next(total_pages));
    }

    fn update_filters(&self, change: impl FnOnce(&mut FilterState)) {
        self.filters.update(change);
        self.reconcile_page();
    }

    fn reconcile_page(&self) {
        let mut page = self.page.get_untracked();
        self.overflow.apply(&mut page, self.filtered_count_untracked());
        if page != self.page.get_untracked() {
            self.page.set(page);
        }
    }

    fn filtered_count_untracked(&self) -> usize {
        self.employees.with_untracked(|employees| {
            self.filters
                .with_untracked(|filters| employees.iter().filter(|e| filters.matches(e)).count())
        })
    }
}
