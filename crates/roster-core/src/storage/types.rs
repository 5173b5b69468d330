//! Core data types for the roster.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between fields in the flat file.
pub const FIELD_DELIMITER: char = ',';

/// Why a compensation value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompensationError {
    #[error("compensation must be a number")]
    NotANumber,

    #[error("compensation must be a positive number")]
    NotPositive,
}

/// A strictly positive, finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Compensation(f64);

impl Compensation {
    pub fn new(value: f64) -> Result<Self, CompensationError> {
        if !value.is_finite() {
            return Err(CompensationError::NotANumber);
        }
        if value <= 0.0 {
            return Err(CompensationError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Compensation {
    type Error = CompensationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Compensation> for f64 {
    fn from(value: Compensation) -> Self {
        value.0
    }
}

/// Shortest representation that parses back to the same value.
impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse user or file text into a compensation.
///
/// Surrounding whitespace is ignored. `inf` and `NaN` are not numbers here.
pub fn parse_compensation(text: &str) -> Result<Compensation, CompensationError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CompensationError::NotANumber)?;
    Compensation::new(value)
}

/// Why a text field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextFieldError {
    #[error("This field cannot be empty.")]
    Empty,

    #[error("This field cannot contain ',' or line breaks.")]
    Unstorable,
}

/// Trim a text field and check that the flat file can hold it.
pub fn normalize_text_field(text: &str) -> Result<String, TextFieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TextFieldError::Empty);
    }
    if trimmed.contains(|c: char| c == FIELD_DELIMITER || c == '\n' || c == '\r') {
        return Err(TextFieldError::Unstorable);
    }
    Ok(trimmed.to_string())
}

/// One employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Ordinal identifier assigned at creation
    pub id: u64,

    pub name: String,

    /// Job title (designation)
    pub title: String,

    pub department: String,

    pub compensation: Compensation,
}

impl Employee {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            title: title.into(),
            department: department.into(),
            compensation,
        }
    }

    /// Case-insensitive substring match against name or title.
    ///
    /// An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.title.to_lowercase().contains(&needle)
    }

    /// The five fields in persisted order.
    pub fn fields(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.title.clone(),
            self.department.clone(),
            self.compensation.to_string(),
        ]
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {:.2}",
            self.id,
            self.name,
            self.title,
            self.department,
            self.compensation.value()
        )
    }
}

/// Replacement values for an update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub compensation: Option<Compensation>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.department.is_none()
            && self.compensation.is_none()
    }

    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(title) = self.title {
            employee.title = title;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(compensation) = self.compensation {
            employee.compensation = compensation;
        }
    }
}
