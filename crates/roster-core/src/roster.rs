//! The in-memory roster and its persistence hook.

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::storage::{Employee, RecordStore};

/// Ordered employee records backed by a [`RecordStore`].
///
/// Records keep insertion order. Removal preserves the relative order of
/// the survivors.
#[derive(Debug)]
pub struct Roster<S: RecordStore> {
    store: S,
    employees: Vec<Employee>,
}

impl<S: RecordStore> Roster<S> {
    /// Load every record from `store`.
    pub fn open(store: S) -> Result<Self> {
        let employees = store.load()?;
        Ok(Self { store, employees })
    }

    /// An empty roster that has not read from `store`.
    pub fn empty(store: S) -> Self {
        Self {
            store,
            employees: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// One greater than the id of the last record, or 1 when empty.
    ///
    /// This follows the last record in order, not the largest id, so
    /// deleting the newest record lets its id be issued again.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Validation` when the last id is `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        let Some(last) = self.employees.last() else {
            return Ok(1);
        };
        last.id.checked_add(1).ok_or_else(|| {
            RosterError::Validation(format!(
                "cannot assign an id after {}; the last record already has the largest id",
                last.id
            ))
        })
    }

    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Remove and return the last record.
    pub fn pop(&mut self) -> Option<Employee> {
        self.employees.pop()
    }

    /// Put a record back at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, employee: Employee) {
        self.employees.insert(index, employee);
    }

    /// Index of the first record whose name or title contains `term`.
    pub fn find_first(&self, term: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.matches(term))
    }

    /// Every record whose name or title contains `term`, in order.
    pub fn find_all(&self, term: &str) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.matches(term)).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Employee> {
        self.employees.get_mut(index)
    }

    /// Remove and return the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Employee {
        self.employees.remove(index)
    }

    /// Write the current records through to the store.
    pub fn save(&self) -> Result<()> {
        debug!(count = self.employees.len(), "persisting roster");
        self.store.save(&self.employees)
    }
}
