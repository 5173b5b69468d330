//! User-facing operations over a [`Roster`](crate::roster::Roster).
//!
//! Each operation runs to completion against a [`Presenter`], persists any
//! mutation before reporting success, and returns an [`Outcome`] describing
//! what happened. `Err` is reserved for input and storage failures.

mod add;
mod delete;
mod list;
mod search;
mod update;

pub use add::add_employee;
pub use delete::delete_employee;
pub use list::list_employees;
pub use search::search_employees;
pub use update::update_employee;

use tracing::debug;

use crate::error::Result;
use crate::presenter::Presenter;
use crate::storage::{normalize_text_field, parse_compensation, Compensation, CompensationError};

/// What an operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(u64),
    Updated(u64),
    Deleted(u64),
    /// A match was found but the user did not confirm.
    Declined,
    /// No record matched the search term.
    NotFound,
    /// The operation was abandoned because of invalid input.
    Rejected(String),
    /// Records were displayed.
    Shown(usize),
    /// There was nothing to display.
    Empty,
}

impl Outcome {
    /// Whether the roster was changed and saved.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Outcome::Added(_) | Outcome::Updated(_) | Outcome::Deleted(_)
        )
    }
}

pub(crate) const NOT_FOUND_MESSAGE: &str = "Employee not found with that name or title.";

/// Prompt until the answer is non-blank and storable.
pub(crate) fn prompt_required_text(ui: &mut impl Presenter, label: &str) -> Result<String> {
    loop {
        let answer = ui.prompt(label)?;
        match normalize_text_field(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(label, reason = %err, "re-prompting for required field");
                ui.error(&format!("{} Please provide a valid input.", err));
            }
        }
    }
}

/// Prompt until the answer parses as a positive number.
pub(crate) fn prompt_compensation(ui: &mut impl Presenter, label: &str) -> Result<Compensation> {
    loop {
        let answer = ui.prompt(label)?;
        match parse_compensation(&answer) {
            Ok(value) => return Ok(value),
            Err(CompensationError::NotPositive) => {
                ui.error("Compensation must be a positive number! Please try again.");
            }
            Err(CompensationError::NotANumber) => {
                ui.error("Invalid compensation! Please enter a valid number.");
            }
        }
    }
}
