// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for `check` results.

use quizsmith_core::{ResponseError, ValidationErrors};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::render::Renderer;

pub use crate::output_diagnostic::{print_error, print_warning};

/// Result of checking one response, in a form both formats can print.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
    pub errors: Vec<ReportedError>,
}

/// One validation error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<usize>,
    pub field: String,
    pub message: String,
}

impl CheckReport {
    pub fn valid(questions: usize) -> Self {
        Self {
            valid: true,
            questions,
            parse_error: None,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: &ValidationErrors) -> Self {
        Self {
            valid: false,
            questions: 0,
            parse_error: None,
            errors: errors
                .iter()
                .map(|e| ReportedError {
                    question: e.question_index(),
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_response_error(error: &ResponseError) -> Self {
        match error {
            ResponseError::Invalid(errors) => Self::from_errors(errors),
            ResponseError::Parse(e) => Self {
                valid: false,
                questions: 0,
                parse_error: Some(format!("{error} ({e})")),
                errors: Vec::new(),
            },
            ResponseError::Empty => Self {
                valid: false,
                questions: 0,
                parse_error: Some(error.to_string()),
                errors: Vec::new(),
            },
        }
    }

    /// Write the report in `format`.
    pub fn write<W: Write>(&self, writer: W, format: &OutputFormat, color: bool) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(writer, color),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    fn write_text<W: Write>(&self, writer: W, color: bool) -> io::Result<()> {
        let mut renderer = Renderer::new(writer, color);
        if let Some(parse_error) = &self.parse_error {
            renderer.line(parse_error)?;
        } else if self.valid {
            renderer.line(format_args!("Valid quiz: {} questions.", self.questions))?;
        } else {
            renderer.errors(self.errors.iter().map(|e| &e.message))?;
        }
        renderer.flush()
    }

    fn write_json<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
