// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz prompt composer and response checker.
//!
//! `quizsmith` builds the instruction prompt a user hands to a text
//! generation service together with their study material, then validates,
//! renders and grades the JSON quiz that comes back. The domain logic lives
//! in [`quizsmith_core`]; this crate adds the command line, config files,
//! clipboard access and terminal rendering.

pub mod answers;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod env;
pub mod logging;
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod render;
pub mod workbench;
