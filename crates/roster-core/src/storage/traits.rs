//! Record store trait definition.
//!
//! The `RecordStore` trait is the durable side of the roster: it turns the
//! ordered list of employees into bytes and back. The in-memory side lives
//! in [`crate::roster::Roster`].

use std::path::Path;

use super::types::Employee;
use crate::error::Result;

/// Durable backing for an ordered list of employees.
///
/// Implementations must ensure:
/// - `load` returns records in the order they were saved
/// - `save` replaces the previous contents entirely
/// - a missing backing resource loads as an empty list
pub trait RecordStore {
    /// Read every record.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Malformed` if any persisted record cannot be
    /// parsed, and `RosterError::Storage` if the resource cannot be read.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the persisted records with `employees`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Validation` if a record cannot be represented,
    /// and `RosterError::Storage` if the write fails. In both cases the
    /// previous contents are left in place.
    fn save(&self, employees: &[Employee]) -> Result<()>;

    /// Where the records live, for display.
    fn location(&self) -> &Path;
}
