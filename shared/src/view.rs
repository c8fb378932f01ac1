//! Derived directory view
//!
//! [`derive_view`] is the whole filter-and-paginate engine: it takes the
//! loaded employees plus the current filter and page state and produces
//! everything the page needs to render. Nothing is cached; callers re-run it
//! whenever an input changes.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::filter::{department_options, gender_options, role_options, FilterState};
use crate::page::PageState;

/// Everything the directory page renders for one set of inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub department_options: Vec<String>,
    pub gender_options: Vec<String>,
    pub role_options: Vec<String>,

    /// Number of employees passing the filter (all pages)
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,

    /// Employees on the current page
    pub items: Vec<Employee>,
}

impl ViewModel {
    /// Nothing passed the filter; render the "no employees" state
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Page numbers for the pager, `1..=total_pages`
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Compute the view for `employees` under `filters` and `page`
pub fn derive_view(employees: &[Employee], filters: &FilterState, page: &PageState) -> ViewModel {
    let filtered = filters.apply(employees);
    let total_pages = page.total_pages(filtered.len());
    let items = page.window(&filtered).iter().map(|e| (*e).clone()).collect();

    ViewModel {
        department_options: department_options(employees),
        gender_options: gender_options(),
        role_options: role_options(),
        filtered_count: filtered.len(),
        total_pages,
        current_page: page.current_page,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|i| Employee::new(format!("Employee{}", i), "Test").with_department("Ops"))
            .collect()
    }

    #[test]
    fn test_empty_collection() {
        let view = derive_view(&[], &FilterState::default(), &PageState::default());
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
        assert!(view.page_numbers().is_empty());
        assert_eq!(view.department_options, vec!["All"]);
    }

    #[test]
    fn test_prev_next_flags() {
        let employees = numbered(20);
        let mut page = PageState::default();

        let view = derive_view(&employees, &FilterState::default(), &page);
        assert!(!view.has_prev());
        assert!(view.has_next());
        assert_eq!(view.page_numbers(), vec![1, 2, 3]);

        page.go_to(3);
        let view = derive_view(&employees, &FilterState::default(), &page);
        assert!(view.has_prev());
        assert!(!view.has_next());
        assert_eq!(view.items.len(), 4);
    }

    #[test]
    fn test_options_ignore_filters() {
        let employees = numbered(3);
        let filters = FilterState::new().with_search("nobody");
        let view = derive_view(&employees, &filters, &PageState::default());
        assert!(view.is_empty());
        assert_eq!(view.department_options, vec!["All", "Ops"]);
        assert_eq!(view.role_options.len(), 3);
    }
}
