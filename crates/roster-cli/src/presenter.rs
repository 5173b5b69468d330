//! Terminal implementation of the core `Presenter`.

use std::io::{self, BufRead, Write};

use roster_core::{Employee, Presenter, RosterError};

use crate::ui::theme::{styled, styles};
use crate::ui::{badge, employee_table, header, Badge, UiContext};

/// Presenter that reads answers from `input` and writes to `output`.
///
/// When `rich` is set and stdin is a terminal, prompts go through
/// dialoguer instead of plain line reads.
///
/// Output methods cannot fail; the first write error is held and returned
/// as `RosterError::Input` by the next prompt.
pub struct ConsolePresenter<R, W> {
    ctx: UiContext,
    input: R,
    output: W,
    rich: bool,
    write_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(ctx: UiContext, input: R, output: W) -> Self {
        let rich = ctx.is_interactive();
        Self {
            ctx,
            input,
            output,
            rich,
            write_error: None,
        }
    }

    pub fn ctx(&self) -> &UiContext {
        &self.ctx
    }

    /// Write a raw line, bypassing badges.
    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{}", text) {
            self.write_error.get_or_insert(err);
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_plain_line(&mut self, label: &str) -> roster_core::Result<String> {
        let prompt = styled(&format!("{}: ", label), styles::prompt(), self.ctx.color);
        write!(self.output, "{}", prompt)
            .and_then(|_| self.output.flush())
            .map_err(|e| RosterError::Input(e.to_string()))?;

        let mut buffer = String::new();
        let read = self
            .input
            .read_line(&mut buffer)
            .map_err(|e| RosterError::Input(e.to_string()))?;
        if read == 0 {
            return Err(RosterError::Input("end of input".to_string()));
        }
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn heading(&mut self, title: &str) {
        let text = header(&self.ctx, title);
        self.line(&format!("\n{}", text));
    }

    fn prompt(&mut self, label: &str) -> roster_core::Result<String> {
        if let Some(err) = self.write_error.take() {
            return Err(RosterError::Input(format!("output failed: {}", err)));
        }
        if self.rich {
            return crate::ui::prompt::prompt_line(label)
                .map_err(|e| RosterError::Input(e.to_string()));
        }
        self.read_plain_line(label)
    }

    fn show_employee(&mut self, employee: &Employee) {
        let text = styled(
            &format!("Employee Found: {}", employee),
            styles::success(),
            self.ctx.color,
        );
        self.line(&format!("\n{}", text));
    }

    fn show_table(&mut self, employees: &[&Employee]) {
        let table = employee_table(&self.ctx, employees);
        self.line(&table);
    }

    fn info(&mut self, message: &str) {
        let text = badge(&self.ctx, Badge::Info, message);
        self.line(&text);
    }

    fn success(&mut self, message: &str) {
        let text = badge(&self.ctx, Badge::Ok, message);
        self.line(&text);
    }

    fn error(&mut self, message: &str) {
        let text = badge(&self.ctx, Badge::Err, message);
        self.line(&text);
    }
}
