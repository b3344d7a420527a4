// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! quizsmith binary entry point.

use std::io::{IsTerminal, Write};

use clap::Parser;

use quizsmith::cli::Cli;
use quizsmith::clipboard::SystemClipboard;
use quizsmith::commands::{self, exit_codes, Io};
use quizsmith::logging;
use quizsmith::output::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let mut clipboard = SystemClipboard::new();

    let color = std::io::stdout().is_terminal();
    let stderr_color = stderr.is_terminal();
    let mut io = Io {
        stdin: &mut stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
        clipboard: &mut clipboard,
        color,
        stderr_color,
    };

    let mut code = match commands::run(&cli, &mut io) {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    drop(io);
    if let Err(e) = stdout.flush() {
        print_error(format_args!("failed to write output: {e}"));
        code = exit_codes::ERROR;
    }
    std::process::exit(code);
}
