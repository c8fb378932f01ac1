//! Employee card grid

use leptos::*;
use personnel_shared::Employee;

use crate::state::AppState;

/// Avatar background derived from the employee's name
fn avatar_color(employee: &Employee) -> &'static str {
    let hash = employee
        .full_name()
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    match hash % 6 {
        0 => "bg-blue-500",
        1 => "bg-violet-500",
        2 => "bg-cyan-500",
        3 => "bg-green-500",
        4 => "bg-orange-500",
        _ => "bg-pink-500",
    }
}

/// Role badge colour
fn role_badge_class(role: Option<&str>) -> &'static str {
    match role {
        Some("MANAGER") => "bg-purple-500/20 text-purple-600 border-purple-500/30",
        Some("EMPLOYEE") => "bg-blue-500/20 text-blue-600 border-blue-500/30",
        _ => "bg-slate-500/20 text-slate-500 border-slate-500/30",
    }
}

fn title_case(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cards for the employees on the current page
#[component]
pub fn EmployeeCards(#[prop(into)] employees: Signal<Vec<Employee>>) -> impl IntoView {
    let theme = expect_context::<AppState>().theme;

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {move || {
                let surface = theme.get().surface_class();
                employees.get().into_iter().map(|employee| {
                    let role = employee.role.clone();
                    view! {
                        <div class=format!(
                            "employee-card border rounded-xl shadow-sm p-5 flex flex-col items-center text-center {}",
                            surface
                        )>
                            <div class=format!(
                                "w-14 h-14 rounded-full flex items-center justify-center text-white text-lg font-semibold mb-3 {}",
                                avatar_color(&employee)
                            )>
                                {employee.initials()}
                            </div>
                            <h3 class="font-semibold">{employee.full_name()}</h3>
                            <p class="text-sm opacity-70">{employee.department_label().to_string()}</p>
                            <div class="flex items-center gap-2 mt-3">
                                <span class=format!(
                                    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium border {}",
                                    role_badge_class(role.as_deref())
                                )>
                                    {role.as_deref().map(title_case).unwrap_or_else(|| "Unknown".to_string())}
                                </span>
                                {employee.gender.as_deref().map(|gender| view! {
                                    <span class="text-xs opacity-60">{title_case(gender)}</span>
                                })}
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("MANAGER"), "Manager");
        assert_eq!(title_case("female"), "Female");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_role_badge_falls_back() {
        assert_eq!(role_badge_class(None), role_badge_class(Some("INTERN")));
        assert_ne!(role_badge_class(Some("MANAGER")), role_badge_class(Some("EMPLOYEE")));
    }
}
