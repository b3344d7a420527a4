// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration loaded from a TOML file.
//!
//! Lookup order: an explicit path (`--config`), `QUIZSMITH_CONFIG`, then
//! `$XDG_CONFIG_HOME/quizsmith/config.toml` or
//! `$HOME/.config/quizsmith/config.toml`. Only the default location may be
//! absent.

use quizsmith_core::notice::DEFAULT_NOTICE_DURATION;
use quizsmith_core::prompt::{clamp_question_count, PromptOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;

/// Question count used when neither flag nor config sets one
pub const DEFAULT_QUESTIONS: u32 = 20;
/// Difficulty used when neither flag nor config sets one
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Contents of `config.toml`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of questions to request
    #[serde(default)]
    pub questions: Option<u32>,

    /// Difficulty label inserted into the prompt
    #[serde(default)]
    pub difficulty: Option<String>,

    /// Allow true/false questions
    #[serde(default)]
    pub true_false: Option<bool>,

    /// Notice display time in milliseconds
    #[serde(default)]
    pub notice_ms: Option<u64>,
}

/// Errors from loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve and load the config, following the lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }
        if let Some(path) = env::config_file() {
            return Self::load_file(&path);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `$XDG_CONFIG_HOME/quizsmith/config.toml`, falling back to `~/.config`.
pub fn default_path() -> Option<PathBuf> {
    let base = env::xdg_config_home().or_else(|| env::home().map(|h| h.join(".config")))?;
    Some(base.join("quizsmith").join("config.toml"))
}

/// Prompt parameters given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptOverrides {
    /// Raw question count text, clamped like a form field
    pub questions: Option<String>,
    pub difficulty: Option<String>,
    pub true_false: Option<bool>,
}

impl Config {
    /// Merge command-line overrides over file values over defaults.
    pub fn prompt_options(&self, overrides: &PromptOverrides) -> PromptOptions {
        let total = match &overrides.questions {
            Some(raw) => clamp_question_count(raw),
            None => self.questions.unwrap_or(DEFAULT_QUESTIONS),
        };
        let difficulty = overrides
            .difficulty
            .clone()
            .or_else(|| self.difficulty.clone())
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());
        let true_false = overrides
            .true_false
            .or(self.true_false)
            .unwrap_or(false);
        PromptOptions::new(total, difficulty, true_false)
    }

    /// Notice display time: environment, then file, then default.
    pub fn notice_duration(&self) -> Duration {
        env::notice_ms()
            .or(self.notice_ms)
            .map_or(DEFAULT_NOTICE_DURATION, Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
