// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout stays clean for prompts, reports and JSON.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::env;
use crate::output_diagnostic::print_warning;

/// Filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_FILTER: &str = "quizsmith=debug,quizsmith_core=debug";

/// Filter used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive: `RUST_LOG`, then `--verbose`, then warnings only.
pub fn filter_directive(rust_log: Option<String>, verbose: bool) -> String {
    match rust_log {
        Some(directive) => directive,
        None if verbose => VERBOSE_FILTER.to_string(),
        None => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let directive = filter_directive(env::rust_log(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        print_warning(format_args!("ignoring log filter {directive:?}: {e}"));
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
