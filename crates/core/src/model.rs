// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz document types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a quiz response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizDocument {
    pub questions: Vec<Question>,
}

/// A single question, either multiple choice or true/false.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Question text shown to the user
    pub question: String,

    /// Question variant; `mcq` when absent
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,

    /// Answer options in display order
    pub options: Vec<String>,

    /// Zero-based index of the correct option
    pub correct_index: usize,

    /// Rationale per option plus one for the correct answer
    pub feedback: Feedback,
}

impl Question {
    /// Whether `index` names the correct option.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Question variant discriminated by the `type` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Four options, one correct
    #[default]
    Mcq,
    /// Options fixed to `["True", "False"]`
    TrueFalse,
}

impl QuestionKind {
    /// Options every question of this kind must have.
    pub const TRUE_FALSE_OPTIONS: [&'static str; 2] = ["True", "False"];

    /// Parse a wire name (`"mcq"` or `"true_false"`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "mcq" => Some(Self::Mcq),
            "true_false" => Some(Self::TrueFalse),
            _ => None,
        }
    }

    /// Wire name of the variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::TrueFalse => "true_false",
        }
    }

    /// Number of options a question of this kind carries.
    pub fn option_count(self) -> usize {
        match self {
            Self::Mcq => 4,
            Self::TrueFalse => 2,
        }
    }

    /// Largest valid `correct_index`.
    pub fn max_index(self) -> usize {
        self.option_count() - 1
    }

    /// Feedback keys required besides `correct`.
    pub fn feedback_keys(self) -> &'static [&'static str] {
        match self {
            Self::Mcq => &["0", "1", "2", "3"],
            Self::TrueFalse => &["0", "1"],
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Feedback record: `{"0": ..., "1": ..., "correct": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feedback {
    /// Why the correct option is correct
    pub correct: String,

    /// Why each option is wrong, keyed by option index as text
    #[serde(flatten)]
    pub options: BTreeMap<String, String>,
}

impl Feedback {
    /// Rationale for option `index`, if present.
    pub fn for_option(&self, index: usize) -> Option<&str> {
        self.options.get(&index.to_string()).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
