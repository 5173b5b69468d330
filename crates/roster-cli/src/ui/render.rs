//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};
use roster_core::Employee;

use super::context::UiContext;
use super::format::employee_row;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Column headers for employee tables.
pub const EMPLOYEE_COLUMNS: [&str; 5] = ["ID", "Name", "Title", "Department", "Compensation"];

/// Render the heading shown before an operation.
///
/// Pretty mode: "Roster · title"
/// Plain mode: "--- title ---"
pub fn header(ctx: &UiContext, title: &str) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let app = styled("Roster", styles::bold(), ctx.color);
            format!("{} \u{00B7} {}", app, styled(title, styles::heading(), ctx.color))
        }
        OutputMode::Plain => format!("--- {} ---", title),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render the numbered main menu.
pub fn menu(ctx: &UiContext, title: &str, items: &[&str]) -> String {
    let mut lines = vec![styled(&format!("--- {} ---", title), styles::heading(), ctx.color)];
    for (i, item) in items.iter().enumerate() {
        let line = format!("{}. {}", i + 1, item);
        let style = if i + 1 == items.len() {
            styles::error()
        } else {
            styles::prompt()
        };
        lines.push(styled(&line, style, ctx.color));
    }
    lines.join("\n")
}

/// Render employees as a table.
///
/// Pretty mode: bordered table with a header row
/// Plain mode: one tab-separated line per employee, no header
pub fn employee_table(ctx: &UiContext, employees: &[&Employee]) -> String {
    let rows: Vec<Vec<String>> = employees.iter().map(|e| employee_row(e)).collect();

    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = EMPLOYEE_COLUMNS
        .iter()
        .map(|h| {
            let cell = Cell::new(h);
            if ctx.color {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
