// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of quizzes and validation errors.

use quizsmith_core::view::{QuestionView, QUIZ_TITLE};
use quizsmith_core::OptionTag;
use std::io::{self, Write};

use crate::answers::option_label;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Title of the validation error card.
pub const ERRORS_TITLE: &str = "Validation errors";

/// Writes quiz output, with ANSI styling when `color` is set.
pub struct Renderer<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn title(&mut self) -> io::Result<()> {
        self.bold_line(QUIZ_TITLE)?;
        writeln!(self.writer)
    }

    /// Heading and options, as shown before an answer.
    pub fn question(&mut self, question: &QuestionView) -> io::Result<()> {
        self.bold_line(&question.heading())?;
        for (i, option) in question.options().iter().enumerate() {
            let marker = if question.selected() == Some(i) { "(x)" } else { "( )" };
            let line = format!("  {marker} {}. {option}", option_label(i));
            match question.tag(i) {
                Some(OptionTag::Correct) => self.tagged(&line, GREEN, "correct")?,
                Some(OptionTag::Wrong) => self.tagged(&line, RED, "wrong")?,
                None => writeln!(self.writer, "{line}")?,
            }
        }
        Ok(())
    }

    /// Feedback text, indented under the question.
    pub fn feedback(&mut self, question: &QuestionView) -> io::Result<()> {
        for line in question.feedback().lines() {
            if line.is_empty() {
                writeln!(self.writer)?;
            } else {
                writeln!(self.writer, "  {line}")?;
            }
        }
        writeln!(self.writer)
    }

    /// Itemized validation errors in place of the quiz.
    pub fn errors<I, E>(&mut self, errors: I) -> io::Result<()>
    where
        I: IntoIterator<Item = E>,
        E: std::fmt::Display,
    {
        self.bold_line(ERRORS_TITLE)?;
        for error in errors {
            if self.color {
                writeln!(self.writer, "{RED}{error}{RESET}")?;
            } else {
                writeln!(self.writer, "{error}")?;
            }
        }
        Ok(())
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn bold_line(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{BOLD}{text}{RESET}")
        } else {
            writeln!(self.writer, "{text}")
        }
    }

    fn tagged(&mut self, line: &str, color: &str, tag: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{color}{line}{RESET}")
        } else {
            writeln!(self.writer, "{line}  [{tag}]")
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
