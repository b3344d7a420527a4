// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grading of a single answer selection.

use crate::model::Question;

/// Feedback shown when no option is selected.
pub const NO_SELECTION: &str = "No option selected.";
/// Fallback when the correct-answer rationale is missing.
pub const CORRECT_FALLBACK: &str = "Correct.";
/// Fallback when the selected option has no rationale.
pub const INCORRECT_FALLBACK: &str = "Incorrect.";
/// Header placed before the correct-answer rationale after a wrong pick.
pub const CORRECT_HEADER: &str = "Why the correct answer is correct:";

/// Visual tag on one option after grading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionTag {
    Correct,
    Wrong,
}

/// Result of grading one selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grade {
    /// Text for the feedback area
    pub feedback: String,
    /// One slot per option
    pub tags: Vec<Option<OptionTag>>,
    /// The graded selection
    pub selected: Option<usize>,
}

impl Grade {
    /// Whether the selection matched the correct option.
    pub fn is_correct(&self) -> bool {
        self.selected
            .zip(self.correct_index())
            .is_some_and(|(selected, correct)| selected == correct)
    }

    /// Index of the option tagged correct, if any.
    pub fn correct_index(&self) -> Option<usize> {
        self.tags.iter().position(|t| *t == Some(OptionTag::Correct))
    }

    /// Index of the option tagged wrong, if any.
    pub fn wrong_index(&self) -> Option<usize> {
        self.tags.iter().position(|t| *t == Some(OptionTag::Wrong))
    }
}

/// Grade `selected` against `question`.
///
/// Tags and text are rebuilt from scratch on every call, so a later
/// selection fully replaces an earlier one.
pub fn grade(question: &Question, selected: Option<usize>) -> Grade {
    let mut tags = vec![None; question.options.len()];

    let Some(selected) = selected else {
        return Grade {
            feedback: NO_SELECTION.to_string(),
            tags,
            selected: None,
        };
    };

    if let Some(tag) = tags.get_mut(question.correct_index) {
        *tag = Some(OptionTag::Correct);
    }

    let correct_reason = non_empty(&question.feedback.correct);
    if question.is_correct(selected) {
        tracing::debug!(selected, "graded correct answer");
        return Grade {
            feedback: correct_reason.unwrap_or(CORRECT_FALLBACK).to_string(),
            tags,
            selected: Some(selected),
        };
    }

    if let Some(tag) = tags.get_mut(selected) {
        *tag = Some(OptionTag::Wrong);
    }
    let wrong_reason = question
        .feedback
        .for_option(selected)
        .and_then(non_empty)
        .unwrap_or(INCORRECT_FALLBACK);
    let feedback = match correct_reason {
        Some(reason) => format!("{wrong_reason}\n\n{CORRECT_HEADER}\n{reason}"),
        None => wrong_reason.to_string(),
    };
    tracing::debug!(selected, correct = question.correct_index, "graded wrong answer");

    Grade {
        feedback,
        tags,
        selected: Some(selected),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
#[path = "grade_tests.rs"]
mod tests;
