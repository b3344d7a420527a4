// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PromptOverrides;

/// Compose quiz prompts and check, render and grade the replies
#[derive(Parser, Debug, Clone)]
#[command(name = "quizsmith", version, about)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/quizsmith/config.toml)
    #[arg(long, global = true, env = "QUIZSMITH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the prompt to give to the generation service
    Prompt(PromptArgs),

    /// Validate a quiz response
    Check(CheckArgs),

    /// Render a quiz response and answer it
    Take(TakeArgs),

    /// Print the schema example embedded in every prompt
    Schema,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PromptArgs {
    /// Number of questions to request (clamped to 1-500)
    #[arg(short = 'n', long, value_name = "N")]
    pub questions: Option<String>,

    /// Difficulty label, inserted verbatim
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Allow true/false questions
    #[arg(long, overrides_with = "no_true_false")]
    pub true_false: bool,

    /// Forbid true/false questions (overrides the config file)
    #[arg(long, overrides_with = "true_false")]
    pub no_true_false: bool,

    /// Also copy the prompt to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl PromptArgs {
    pub fn overrides(&self) -> PromptOverrides {
        let true_false = if self.true_false {
            Some(true)
        } else if self.no_true_false {
            Some(false)
        } else {
            None
        };
        PromptOverrides {
            questions: self.questions.clone(),
            difficulty: self.difficulty.clone(),
            true_false,
        }
    }
}

/// Where a quiz response comes from
#[derive(Args, Debug, Clone, Default)]
pub struct ResponseSource {
    /// Response file; reads stdin when omitted
    #[arg(value_name = "FILE", conflicts_with = "paste")]
    pub file: Option<PathBuf>,

    /// Read the response from the clipboard
    #[arg(long)]
    pub paste: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: ResponseSource,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct TakeArgs {
    #[command(flatten)]
    pub source: ResponseSource,

    /// Comma-separated answers, one per question (letter, number, option text, or - to skip)
    #[arg(long, value_name = "LIST")]
    pub answers: Option<String>,
}

/// Output format for check reports
#[derive(Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON report object
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
