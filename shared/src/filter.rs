//! Directory filters
//!
//! Four independent constraints combined with logical AND:
//! - department, gender and role selectors (exact match, or [`ALL_OPTION`])
//! - a free-text search over the employee's full name

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Selector value that imposes no constraint
pub const ALL_OPTION: &str = "All";

/// Fixed gender selector values
pub const GENDER_OPTIONS: &[&str] = &[ALL_OPTION, "MALE", "FEMALE"];

/// Fixed role selector values
pub const ROLE_OPTIONS: &[&str] = &[ALL_OPTION, "MANAGER", "EMPLOYEE"];

/// Current search and selector values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub department: String,
    pub gender: String,
    pub role: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            department: ALL_OPTION.to_string(),
            gender: ALL_OPTION.to_string(),
            role: ALL_OPTION.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// True when every employee passes
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.department == ALL_OPTION
            && self.gender == ALL_OPTION
            && self.role == ALL_OPTION
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `employee` satisfies all four constraints
    pub fn matches(&self, employee: &Employee) -> bool {
        selector_matches(&self.department, employee.department_name.as_deref())
            && selector_matches(&self.gender, employee.gender.as_deref())
            && selector_matches(&self.role, employee.role.as_deref())
            && employee
                .full_name()
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }

    /// Employees passing the filter, in collection order
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

// A concrete selector never matches a missing value, so picking the
// "Not Assigned" placeholder only finds employees literally named that.
fn selector_matches(selected: &str, value: Option<&str>) -> bool {
    selected == ALL_OPTION || value == Some(selected)
}

/// `"All"` followed by each distinct department label in first-seen order
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    let distinct: IndexSet<&str> = employees.iter().map(Employee::department_label).collect();

    std::iter::once(ALL_OPTION)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

pub fn gender_options() -> Vec<String> {
    GENDER_OPTIONS.iter().map(|s| s.to_string()).collect()
}

pub fn role_options() -> Vec<String> {
    ROLE_OPTIONS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::UNASSIGNED_DEPARTMENT;

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new("John", "Doe")
                .with_department("Sales")
                .with_gender("MALE")
                .with_role("EMPLOYEE"),
            Employee::new("Jane", "Roe")
                .with_department("Engineering")
                .with_gender("FEMALE")
                .with_role("MANAGER"),
            Employee::new("Alex", "Johnson").with_gender("MALE").with_role("MANAGER"),
            Employee::new("Mira", "Stone")
                .with_department("Sales")
                .with_gender("FEMALE")
                .with_role("EMPLOYEE"),
        ]
    }

    fn names(employees: Vec<&Employee>) -> Vec<String> {
        employees.into_iter().map(Employee::full_name).collect()
    }

    #[test]
    fn test_default_filter_passes_everyone() {
        let staff = staff();
        let filter = FilterState::default();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&staff).len(), staff.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_full_name() {
        let staff = staff();
        let filter = FilterState::new().with_search("jo");
        assert_eq!(names(filter.apply(&staff)), vec!["John Doe", "Alex Johnson"]);

        let filter = FilterState::new().with_search("E R");
        assert_eq!(names(filter.apply(&staff)), vec!["Jane Roe"]);
    }

    #[test]
    fn test_selectors_combine_with_and() {
        let staff = staff();
        let filter = FilterState::new()
            .with_department("Sales")
            .with_gender("FEMALE");
        assert_eq!(names(filter.apply(&staff)), vec!["Mira Stone"]);

        let filter = FilterState::new().with_role("MANAGER").with_search("alex");
        assert_eq!(names(filter.apply(&staff)), vec!["Alex Johnson"]);
    }

    #[test]
    fn test_placeholder_department_matches_no_missing_values() {
        let staff = staff();
        let filter = FilterState::new().with_department(UNASSIGNED_DEPARTMENT);
        assert!(filter.apply(&staff).is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = FilterState::new().with_search("x").with_role("MANAGER");
        filter.clear();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_department_options_first_seen_order() {
        let options = department_options(&staff());
        assert_eq!(options, vec!["All", "Sales", "Engineering", UNASSIGNED_DEPARTMENT]);
    }

    #[test]
    fn test_department_options_empty_collection() {
        assert_eq!(department_options(&[]), vec![ALL_OPTION]);
    }

    #[test]
    fn test_fixed_options() {
        assert_eq!(gender_options(), vec!["All", "MALE", "FEMALE"]);
        assert_eq!(role_options(), vec!["All", "MANAGER", "EMPLOYEE"]);
    }
}
