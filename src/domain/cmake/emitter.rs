//! Statement rendering and the output accumulator.

use std::fmt;
use std::io::Write;

use crate::domain::AppError;

/// Indentation of statement arguments placed on their own line.
pub const ARGUMENT_INDENT: &str = "        ";

/// One CMake command invocation.
///
/// Head arguments share the line of the command name; body arguments go on
/// their own indented lines:
///
/// ```text
/// target_include_directories(fmt SYSTEM
///         PUBLIC ${fmt_SOURCE_DIR}/include)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    command: String,
    head: Vec<String>,
    body: Vec<String>,
}

impl Statement {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into(), head: Vec::new(), body: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.head.push(arg.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.command, self.head.join(" "))?;
        for line in &self.body {
            write!(f, "\n{}{}", ARGUMENT_INDENT, line)?;
        }
        f.write_str(")")
    }
}

/// Accumulates emitted lines onto an output sink.
///
/// Tracks whether the last line written was blank so separators are never
/// doubled; `ensure_separator` is idempotent.
pub struct Emitter<'w> {
    out: &'w mut dyn Write,
    separated: bool,
}

impl<'w> Emitter<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self { out, separated: true }
    }

    pub fn statement(&mut self, statement: &Statement) -> Result<(), AppError> {
        writeln!(self.out, "{}", statement)?;
        self.separated = false;
        Ok(())
    }

    pub fn comment(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.out, "# {}", text)?;
        self.separated = false;
        Ok(())
    }

    /// Write a blank line unconditionally.
    pub fn blank_line(&mut self) -> Result<(), AppError> {
        writeln!(self.out)?;
        self.separated = true;
        Ok(())
    }

    /// Write a blank line unless the previous line already was one.
    pub fn ensure_separator(&mut self) -> Result<(), AppError> {
        if !self.separated {
            self.blank_line()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}
