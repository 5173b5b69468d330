//! Application-level utilities for the Roster CLI.
//!
//! This module provides:
//! - Path resolution for config and data files
//! - The shared application context
//! - The interactive menu loop

mod context;
mod menu;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use menu::{run_menu, run_single, MenuChoice};
