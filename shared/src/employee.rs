//! Employee records as served by the personnel API
//!
//! Only the fields the directory filters on are typed; everything else the
//! backend sends is carried through untouched in [`Employee::extra`].

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown in the department list for employees without one
pub const UNASSIGNED_DEPARTMENT: &str = "Not Assigned";

/// A single employee from the personnel collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub first_name: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub last_name: String,

    #[serde(
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub department_name: Option<String>,

    /// `MALE` or `FEMALE` on well-formed records
    #[serde(
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,

    /// `MANAGER` or `EMPLOYEE` on well-formed records
    #[serde(
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,

    /// Fields the directory does not interpret (id, email, phone, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department_name = Some(department.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// `"<first> <last>"`, the string the search box matches against
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department for display; empty and missing both read as unassigned
    pub fn department_label(&self) -> &str {
        match self.department_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNASSIGNED_DEPARTMENT,
        }
    }

    /// Up to two uppercase initials for the avatar
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Stable identifier when the backend provides one
    pub fn id(&self) -> Option<String> {
        match self.extra.get("id")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

// Scalars of the wrong JSON type are kept as their text; arrays, objects
// and null read as absent.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_or_none(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case_with_extra_fields() {
        let json = serde_json::json!({
            "id": 42,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "departmentName": "Engineering",
            "gender": "FEMALE",
            "role": "MANAGER",
            "email": "ada@example.com"
        });

        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.department_name.as_deref(), Some("Engineering"));
        assert_eq!(employee.gender.as_deref(), Some("FEMALE"));
        assert_eq!(employee.role.as_deref(), Some("MANAGER"));
        assert_eq!(employee.id().as_deref(), Some("42"));
        assert_eq!(employee.extra.get("email").and_then(|v| v.as_str()), Some("ada@example.com"));
        assert!(!employee.extra.contains_key("firstName"));
    }

    #[test]
    fn test_missing_fields_default() {
        let employee: Employee = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(employee.first_name, "");
        assert_eq!(employee.department_name, None);
        assert_eq!(employee.department_label(), UNASSIGNED_DEPARTMENT);
        assert_eq!(employee.initials(), "?");
    }

    #[test]
    fn test_null_names_decode_as_empty() {
        let json = serde_json::json!({ "firstName": null, "lastName": "Doe", "role": null });
        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.full_name(), " Doe");
        assert_eq!(employee.role, None);
    }

    #[test]
    fn test_empty_department_is_unassigned() {
        let employee = Employee::new("Jo", "March").with_department("");
        assert_eq!(employee.department_label(), UNASSIGNED_DEPARTMENT);
    }

    #[test]
    fn test_initials() {
        assert_eq!(Employee::new("grace", "hopper").initials(), "GH");
        assert_eq!(Employee::new("Cher", "").initials(), "C");
    }
}
