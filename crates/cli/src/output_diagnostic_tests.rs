// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn render(level: Level, msg: impl Display, is_terminal: bool) -> String {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, level, msg, is_terminal);
    String::from_utf8(buf).unwrap()
}

#[parameterized(
    error = { Level::Error, "Error: config file not found\n" },
    warning = { Level::Warning, "Warning: config file not found\n" },
    notice = { Level::Notice, "config file not found\n" },
)]
fn plain_text_when_not_terminal(level: Level, expected: &str) {
    assert_eq!(render(level, "config file not found", false), expected);
}

#[parameterized(
    error = { Level::Error, "\x1b[31mError: bad input\x1b[0m\n" },
    warning = { Level::Warning, "\x1b[33mWarning: bad input\x1b[0m\n" },
    notice = { Level::Notice, "\x1b[36mbad input\x1b[0m\n" },
)]
fn colored_when_terminal(level: Level, expected: &str) {
    assert_eq!(render(level, "bad input", true), expected);
}

#[test]
fn accepts_format_args() {
    let out = render(Level::Error, format_args!("{} answers given", 3), false);
    assert_eq!(out, "Error: 3 answers given\n");
}

#[test]
fn notice_helper_matches_level() {
    let mut buf = Vec::new();
    write_notice(&mut buf, "Prompt copied.", false);
    assert_eq!(String::from_utf8(buf).unwrap(), "Prompt copied.\n");
}
