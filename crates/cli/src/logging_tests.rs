// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    rust_log_wins = { Some("trace"), true, "trace" },
    rust_log_without_verbose = { Some("quizsmith=info"), false, "quizsmith=info" },
    verbose = { None, true, VERBOSE_FILTER },
    quiet = { None, false, DEFAULT_FILTER },
)]
fn filter_precedence(rust_log: Option<&str>, verbose: bool, expected: &str) {
    assert_eq!(filter_directive(rust_log.map(str::to_string), verbose), expected);
}

#[test]
fn init_twice_does_not_panic() {
    init(false);
    init(true);
}
