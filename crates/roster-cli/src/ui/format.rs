//! String formatting utilities for UI rendering.

use roster_core::Employee;

/// Format a compensation amount with two decimals and thousands separators.
pub fn format_compensation(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, fraction)
}

/// The five display cells for one employee.
pub fn employee_row(employee: &Employee) -> Vec<String> {
    vec![
        employee.id.to_string(),
        employee.name.clone(),
        employee.title.clone(),
        employee.department.clone(),
        format_compensation(employee.compensation.value()),
    ]
}
