use tracing::{info, warn};

use super::{Outcome, NOT_FOUND_MESSAGE};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::roster::Roster;
use crate::storage::{
    normalize_text_field, parse_compensation, CompensationError, EmployeePatch, RecordStore,
};

/// Edit the first record whose name or title contains the search term.
///
/// Blank answers keep the current value. All answers are gathered and
/// checked before the record is touched: an invalid replacement abandons
/// the whole update and leaves both memory and disk unchanged.
pub fn update_employee<S: RecordStore>(
    roster: &mut Roster<S>,
    ui: &mut impl Presenter,
) -> Result<Outcome> {
    ui.heading("Update Employee Information");
    let term = ui.prompt("Enter Employee Name or Title to update")?;

    let Some(index) = roster.find_first(&term) else {
        ui.error(NOT_FOUND_MESSAGE);
        return Ok(Outcome::NotFound);
    };
    let Some(found) = roster.get(index).cloned() else {
        return Ok(Outcome::NotFound);
    };
    let id = found.id;
    ui.show_employee(&found);

    let name = ui.prompt("Enter new name (Press Enter to keep current)")?;
    let title = ui.prompt("Enter new title (Press Enter to keep current)")?;
    let department = ui.prompt("Enter new department (Press Enter to keep current)")?;
    let compensation = ui.prompt("Enter new compensation (Press Enter to keep current)")?;

    let patch = match build_patch(&name, &title, &department, &compensation) {
        Ok(patch) => patch,
        Err(reason) => {
            info!(id, %reason, "update abandoned");
            ui.error(&reason);
            return Ok(Outcome::Rejected(reason));
        }
    };

    if let Some(employee) = roster.get_mut(index) {
        patch.apply(employee);
    }
    if let Err(err) = roster.save() {
        warn!(id, error = %err, "save failed, restoring previous values");
        if let Some(employee) = roster.get_mut(index) {
            *employee = found;
        }
        return Err(err);
    }

    info!(id, "employee updated");
    ui.success("Employee updated successfully!");
    Ok(Outcome::Updated(id))
}

fn build_patch(
    name: &str,
    title: &str,
    department: &str,
    compensation: &str,
) -> std::result::Result<EmployeePatch, String> {
    let compensation = if compensation.trim().is_empty() {
        None
    } else {
        match parse_compensation(compensation) {
            Ok(value) => Some(value),
            Err(CompensationError::NotPositive) => {
                return Err("Compensation must be a positive number.".to_string())
            }
            Err(CompensationError::NotANumber) => {
                return Err("Invalid compensation input! It must be a number.".to_string())
            }
        }
    };

    Ok(EmployeePatch {
        name: optional_text(name)?,
        title: optional_text(title)?,
        department: optional_text(department)?,
        compensation,
    })
}

fn optional_text(answer: &str) -> std::result::Result<Option<String>, String> {
    if answer.trim().is_empty() {
        return Ok(None);
    }
    normalize_text_field(answer)
        .map(Some)
        .map_err(|err| err.to_string())
}
