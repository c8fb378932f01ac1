//! Loading the employee collection
//!
//! The personnel endpoint answers `{ "result": [ ... ] }`. Anything else,
//! including a `null` or missing `result`, is an empty directory rather than
//! an error. Transport and status failures are the client's business and end
//! up as [`LoadPhase::Failed`].

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Message shown to the user when the initial fetch fails
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch employees. Please try again later.";

/// Where the directory is in its one-shot load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "message", rename_all = "lowercase")]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

impl LoadPhase {
    /// The failure phase with the standard user-facing message
    pub fn fetch_failed() -> Self {
        LoadPhase::Failed(FETCH_FAILURE_MESSAGE.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Extract the employee list from a personnel response body
///
/// Non-object entries in `result` are dropped; an absent, `null` or
/// non-array `result` yields an empty list. Object entries are always kept,
/// even when a field has an unexpected JSON type.
pub fn employees_from_response(body: serde_json::Value) -> Vec<Employee> {
    let serde_json::Value::Object(mut body) = body else {
        return Vec::new();
    };

    match body.remove("result") {
        Some(serde_json::Value::Array(entries)) => entries
            .into_iter()
            .filter(serde_json::Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_list() {
        let body = json!({
            "result": [
                { "firstName": "John", "lastName": "Doe", "departmentName": "Sales" },
                { "firstName": "Jane", "lastName": "Roe" }
            ]
        });

        let employees = employees_from_response(body);
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].full_name(), "John Doe");
        assert_eq!(employees[1].department_name, None);
    }

    #[test]
    fn test_null_result_is_empty() {
        assert!(employees_from_response(json!({ "result": null })).is_empty());
    }

    #[test]
    fn test_other_shapes_are_empty() {
        assert!(employees_from_response(json!({})).is_empty());
        assert!(employees_from_response(json!({ "data": [] })).is_empty());
        assert!(employees_from_response(json!({ "result": { "firstName": "x" } })).is_empty());
        assert!(employees_from_response(json!([{ "firstName": "x" }])).is_empty());
        assert!(employees_from_response(json!(null)).is_empty());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let body = json!({ "result": [ 1, "two", { "firstName": "Three" }, null ] });
        let employees = employees_from_response(body);
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].first_name, "Three");
    }

    #[test]
    fn test_mistyped_fields_keep_the_record() {
        let body = json!({
            "result": [
                { "firstName": "John", "lastName": "Doe", "departmentName": "Sales" },
                { "firstName": "Jane", "lastName": "Roe", "departmentName": 7 },
                { "firstName": 12345, "lastName": "Smith" },
                { "firstName": "Ann", "lastName": "Lee", "gender": true, "role": ["x"] }
            ]
        });

        let employees = employees_from_response(body);
        assert_eq!(employees.len(), 4);
        assert_eq!(employees[1].department_name.as_deref(), Some("7"));
        assert_eq!(employees[2].full_name(), "12345 Smith");
        assert_eq!(employees[3].gender.as_deref(), Some("true"));
        assert_eq!(employees[3].role, None);
    }

    #[test]
    fn test_load_phase_transitions() {
        let phase = LoadPhase::default();
        assert!(phase.is_loading());
        assert_eq!(phase.error(), None);

        let failed = LoadPhase::fetch_failed();
        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some(FETCH_FAILURE_MESSAGE));

        assert!(LoadPhase::Ready.is_ready());
    }
}
