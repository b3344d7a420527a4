// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.
//!
//! Every command runs against an [`Io`] bundle instead of the process
//! handles, so tests can drive them with buffers and an in-memory clipboard.

use quizsmith_core::prompt::schema_example;
use quizsmith_core::time::SystemClock;
use quizsmith_core::{parse_response, PromptOptions};
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use crate::answers::{option_label, parse_answer, split_answer_list, AnswerParseError};
use crate::cli::{CheckArgs, Cli, Command, PromptArgs, ResponseSource, TakeArgs};
use crate::clipboard::Clipboard;
use crate::config::{Config, ConfigError};
use crate::output::CheckReport;
use crate::output_diagnostic::{write_error, write_notice};
use crate::render::Renderer;
use crate::workbench::{RenderOutcome, Results, Workbench};

/// Process exit codes
pub mod exit_codes {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// Invalid response, failed clipboard access, or any other error
    pub const ERROR: i32 = 1;
}

/// Errors that abort a command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    ReadResponse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Answers(#[from] AnswerParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Process handles a command reads from and writes to.
pub struct Io<'a> {
    pub stdin: &'a mut dyn BufRead,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub clipboard: &'a mut dyn Clipboard,
    /// Style stdout with ANSI colors
    pub color: bool,
    /// Style stderr with ANSI colors
    pub stderr_color: bool,
}

impl Io<'_> {
    fn notice(&mut self, message: &str) {
        write_notice(&mut self.stderr, message, self.stderr_color);
    }

    fn error(&mut self, message: impl std::fmt::Display) {
        write_error(&mut self.stderr, message, self.stderr_color);
    }
}

/// Run the parsed command line; returns the process exit code.
pub fn run(cli: &Cli, io: &mut Io<'_>) -> Result<i32, CommandError> {
    let load = || Config::load(cli.config.as_deref());
    match &cli.command {
        Command::Prompt(args) => run_prompt(args, &load()?, io),
        Command::Check(args) => run_check(args, &load()?, io),
        Command::Take(args) => run_take(args, &load()?, io),
        Command::Schema => run_schema(io),
    }
}

fn workbench(options: &PromptOptions, config: &Config) -> Workbench<SystemClock> {
    Workbench::new(options, SystemClock::new(), config.notice_duration())
}

/// Print the composed prompt, optionally copying it.
pub fn run_prompt(args: &PromptArgs, config: &Config, io: &mut Io<'_>) -> Result<i32, CommandError> {
    let options = config.prompt_options(&args.overrides());
    let mut bench = workbench(&options, config);
    let prompt = bench.build_prompt().to_string();
    writeln!(io.stdout, "{prompt}")?;
    io.stdout.flush()?;

    if !args.copy {
        return Ok(exit_codes::SUCCESS);
    }
    let copied = bench.copy_prompt(io.clipboard);
    if let Some(message) = bench.last_notice() {
        io.notice(message);
    }
    Ok(if copied {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    })
}

/// Load the response text into the workbench from the chosen source.
///
/// Returns `false` after printing a notice when the clipboard gave nothing.
fn load_response(
    source: &ResponseSource,
    bench: &mut Workbench<SystemClock>,
    io: &mut Io<'_>,
) -> Result<bool, CommandError> {
    if source.paste {
        let pasted = bench.paste_response(io.clipboard);
        if let Some(message) = bench.last_notice() {
            io.notice(message);
        }
        return Ok(pasted);
    }
    let text = match &source.file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CommandError::ReadResponse {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut text = String::new();
            io.stdin.read_to_string(&mut text)?;
            text
        }
    };
    bench.set_response(text);
    Ok(true)
}

/// Validate a response and print the report.
pub fn run_check(args: &CheckArgs, config: &Config, io: &mut Io<'_>) -> Result<i32, CommandError> {
    let mut bench = workbench(&PromptOptions::default(), config);
    if !load_response(&args.source, &mut bench, io)? {
        return Ok(exit_codes::ERROR);
    }

    let report = match parse_response(bench.response()) {
        Ok(doc) => CheckReport::valid(doc.questions.len()),
        Err(e) => CheckReport::from_response_error(&e),
    };
    tracing::debug!(valid = report.valid, errors = report.errors.len(), "checked response");
    report.write(&mut io.stdout, &args.output_format, io.color)?;
    Ok(if report.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    })
}

/// Render a response, collect answers and grade them.
pub fn run_take(args: &TakeArgs, config: &Config, io: &mut Io<'_>) -> Result<i32, CommandError> {
    let mut bench = workbench(&PromptOptions::default(), config);
    if !load_response(&args.source, &mut bench, io)? {
        return Ok(exit_codes::ERROR);
    }

    let outcome = bench.render();
    if let Some(message) = bench.last_notice() {
        io.notice(message);
    }
    match outcome {
        RenderOutcome::Rendered => {}
        RenderOutcome::Invalid => {
            if let Results::Errors(errors) = bench.results() {
                let mut renderer = Renderer::new(&mut io.stdout, io.color);
                renderer.errors(errors)?;
            }
            return Ok(exit_codes::ERROR);
        }
        RenderOutcome::MissingInput | RenderOutcome::InvalidJson => {
            return Ok(exit_codes::ERROR);
        }
    }

    let count = bench.quiz().map_or(0, |quiz| quiz.len());
    let scripted = match &args.answers {
        Some(list) => Some(split_answer_list(list, count)?),
        None => None,
    };

    Renderer::new(&mut io.stdout, io.color).title()?;
    for index in 0..count {
        let Some(question) = bench.quiz().and_then(|quiz| quiz.get(index)).cloned() else {
            break;
        };
        let selection = match &scripted {
            Some(answers) => parse_answer(&answers[index], question.options())?,
            None => {
                Renderer::new(&mut io.stdout, io.color).question(&question)?;
                match ask(&question, io)? {
                    Answer::Selected(selection) => selection,
                    Answer::EndOfInput => break,
                }
            }
        };

        bench.select_answer(index, selection);
        if let Some(graded) = bench.quiz().and_then(|quiz| quiz.get(index)) {
            let mut renderer = Renderer::new(&mut io.stdout, io.color);
            renderer.question(graded)?;
            renderer.feedback(graded)?;
        }
    }

    if let Some(quiz) = bench.quiz() {
        let score = quiz.score();
        tracing::info!(correct = score.correct, answered = score.answered, total = score.total, "quiz finished");
        Renderer::new(&mut io.stdout, io.color).line(score)?;
    }
    io.stdout.flush()?;
    Ok(exit_codes::SUCCESS)
}

enum Answer {
    Selected(Option<usize>),
    EndOfInput,
}

/// Prompt on stdout until stdin yields a usable answer.
fn ask(question: &quizsmith_core::QuestionView, io: &mut Io<'_>) -> Result<Answer, CommandError> {
    let last = option_label(question.options().len().saturating_sub(1));
    loop {
        write!(io.stdout, "Answer (A-{last}, Enter to skip): ")?;
        io.stdout.flush()?;

        let mut line = String::new();
        if io.stdin.read_line(&mut line)? == 0 {
            writeln!(io.stdout)?;
            return Ok(Answer::EndOfInput);
        }
        match parse_answer(&line, question.options()) {
            Ok(selection) => return Ok(Answer::Selected(selection)),
            Err(e) => io.error(e),
        }
    }
}

/// Print the schema example as pretty JSON.
pub fn run_schema(io: &mut Io<'_>) -> Result<i32, CommandError> {
    serde_json::to_writer_pretty(&mut io.stdout, &schema_example())?;
    writeln!(io.stdout)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
