//! The boundary between operations and whoever is at the keyboard.
//!
//! Operations never print or read directly. They ask a [`Presenter`] for
//! text and hand it results to show, so the same operation can drive a
//! terminal, a script, or a test.

use crate::error::Result;
use crate::storage::Employee;

/// Answers that count as "yes" at a confirmation prompt.
pub fn is_affirmative(answer: &str) -> bool {
    answer == "y" || answer == "Y"
}

/// Input and output capabilities operations depend on.
pub trait Presenter {
    /// Show the title of the operation about to run.
    fn heading(&mut self, title: &str);

    /// Read one line of text after showing `label`.
    ///
    /// The returned text has its line terminator removed but is otherwise
    /// as typed. Returns `RosterError::Input` when no more input exists.
    fn prompt(&mut self, label: &str) -> Result<String>;

    /// Ask a yes/no question. Only an explicit `y` counts as yes.
    fn confirm(&mut self, label: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} (y/n)", label))?;
        Ok(is_affirmative(&answer))
    }

    /// Show a single record that an operation is about to act on.
    fn show_employee(&mut self, employee: &Employee);

    /// Show records as a table.
    fn show_table(&mut self, employees: &[&Employee]);

    fn info(&mut self, message: &str);

    fn success(&mut self, message: &str);

    fn error(&mut self, message: &str);
}
