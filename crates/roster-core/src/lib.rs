//! # Roster Core
//!
//! Core library for Roster - a small, single-user employee roster kept in a
//! flat text file.
//!
//! This crate provides the data model, persistence, and the user-facing
//! operations independent of any terminal.
//!
//! ## Architecture
//!
//! - **storage**: `Employee` record, `RecordStore` trait, flat file backend
//! - **roster**: the ordered in-memory collection and id assignment
//! - **presenter**: the input/output boundary operations talk through
//! - **operations**: add, update, delete, search, list

pub mod error;
pub mod fs;
pub mod operations;
pub mod presenter;
pub mod roster;
pub mod storage;

pub use error::{Result, RosterError};
pub use operations::Outcome;
pub use presenter::Presenter;
pub use roster::Roster;
pub use storage::{Employee, FlatFileStore, RecordStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
