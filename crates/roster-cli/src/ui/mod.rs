//! UI primitives for the Roster CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and named styles
//! - **Render**: Headers, menus, employee tables, error messages
//! - **Format**: Display formatting for record fields
//! - **Prompt**: Rich terminal input
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, UiOptions};
//! use crate::ui::render::{header, employee_table};
//!
//! let ctx = UiContext::from_env(UiOptions { json: args.json, ..Default::default() });
//! println!("{}", header(&ctx, "View All Employees"));
//! println!("{}", employee_table(&ctx, &employees));
//! ```

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{UiContext, UiOptions};
pub use mode::{OutputFormat, OutputMode};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, employee_table, header, menu, print_error};
