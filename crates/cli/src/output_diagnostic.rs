// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-line diagnostics on stderr: errors, warnings and workbench notices.
//!
//! Each level has its own ANSI color, used only when the target is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Diagnostic severity, which picks the prefix and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    /// Outcome of a user action, such as `Prompt copied.`
    Notice,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Self::Error => "Error: ",
            Self::Warning => "Warning: ",
            Self::Notice => "",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
            Self::Notice => "\x1b[36m",
        }
    }
}

/// Write one diagnostic line. Write failures are ignored.
pub(crate) fn write_diagnostic<W: Write>(writer: &mut W, level: Level, msg: impl Display, is_terminal: bool) {
    let prefix = level.prefix();
    let _ = if is_terminal {
        writeln!(writer, "{}{prefix}{msg}\x1b[0m", level.color())
    } else {
        writeln!(writer, "{prefix}{msg}")
    };
}

fn print(level: Level, msg: impl Display) {
    let mut stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr, level, msg, is_tty);
}

/// Print an error to stderr, red on a terminal.
pub fn print_error(msg: impl Display) {
    print(Level::Error, msg);
}

/// Print a warning to stderr, yellow on a terminal.
pub fn print_warning(msg: impl Display) {
    print(Level::Warning, msg);
}

pub(crate) fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_diagnostic(writer, Level::Error, msg, is_terminal);
}

pub(crate) fn write_notice<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_diagnostic(writer, Level::Notice, msg, is_terminal);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
