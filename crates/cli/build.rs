// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Generates `env_names.rs`: one `&str` constant per environment variable
//! read at runtime, so `src/env.rs` is the only place that names them.

use std::io::Write;

/// Variable name and the doc line emitted above its constant.
const VARS: &[(&str, &str)] = &[
    ("QUIZSMITH_CONFIG", "Explicit config file path."),
    ("QUIZSMITH_NOTICE_MS", "Notice display time in milliseconds."),
    ("XDG_CONFIG_HOME", "Base directory for user config files."),
    ("RUST_LOG", "Log filter directive."),
    ("HOME", "User home directory."),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::fs::File::create(path).unwrap();

    for (name, doc) in VARS {
        writeln!(f, "/// {doc}").unwrap();
        writeln!(f, "pub const {name}: &str = \"{name}\";").unwrap();
    }
}
