//! JSON output formatting for employees.

use roster_core::Employee;

/// Convert an employee to JSON for output.
pub fn employee_json(employee: &Employee) -> serde_json::Value {
    serde_json::json!({
        "id": employee.id,
        "name": employee.name,
        "title": employee.title,
        "department": employee.department,
        "compensation": employee.compensation.value(),
    })
}

/// Convert multiple employees to a JSON array for output.
pub fn employees_json(employees: &[&Employee]) -> Vec<serde_json::Value> {
    employees
        .iter()
        .map(|employee| employee_json(employee))
        .collect()
}
