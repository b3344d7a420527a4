// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by quizsmith are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `QUIZSMITH_CONFIG`: Explicit config file path.
pub fn config_file() -> Option<PathBuf> {
    var_path(names::QUIZSMITH_CONFIG)
}

/// `QUIZSMITH_NOTICE_MS`: How long notices stay visible.
pub fn notice_ms() -> Option<u64> {
    std::env::var(names::QUIZSMITH_NOTICE_MS)
        .ok()
        .and_then(|v| v.parse().ok())
}

/// `XDG_CONFIG_HOME`: Base directory for user config files.
pub fn xdg_config_home() -> Option<PathBuf> {
    var_path(names::XDG_CONFIG_HOME)
}

/// `RUST_LOG`: Log filter; overrides `--verbose`.
pub fn rust_log() -> Option<String> {
    std::env::var(names::RUST_LOG).ok().filter(|v| !v.is_empty())
}

/// `HOME`: User's home directory.
pub fn home() -> Option<PathBuf> {
    var_path(names::HOME)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
