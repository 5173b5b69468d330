//! Storage layer: record types, the store trait, and the flat file backend.

pub mod flat_file;
pub mod traits;
pub mod types;

pub use flat_file::{FlatFileStore, DEFAULT_FILE_NAME};
pub use traits::RecordStore;
pub use types::{
    normalize_text_field, parse_compensation, Compensation, CompensationError, Employee,
    EmployeePatch, TextFieldError, FIELD_DELIMITER,
};
