// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View model for a rendered quiz.
//!
//! Holds what a front end needs to draw each question: heading, options,
//! selection, option tags and feedback text. Rendering itself is left to
//! the caller.

use crate::grade::{grade, Grade, OptionTag};
use crate::model::{Question, QuestionKind, QuizDocument};

/// Feedback shown before any option is picked.
pub const INITIAL_FEEDBACK: &str = "Select an answer to see feedback.";

/// One rendered question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    question: Question,
    number: usize,
    grade: Option<Grade>,
}

impl QuestionView {
    fn new(question: Question, number: usize) -> Self {
        Self {
            question,
            number,
            grade: None,
        }
    }

    /// `"3) Question text"`, with `" (T/F)"` appended for true/false.
    pub fn heading(&self) -> String {
        let suffix = match self.question.kind {
            QuestionKind::TrueFalse => " (T/F)",
            QuestionKind::Mcq => "",
        };
        format!("{}) {}{}", self.number, self.question.question, suffix)
    }

    /// One-based position in the quiz.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.question.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.grade.as_ref().and_then(|g| g.selected)
    }

    /// Tag on option `index`, if grading has tagged it.
    pub fn tag(&self, index: usize) -> Option<OptionTag> {
        self.grade
            .as_ref()
            .and_then(|g| g.tags.get(index).copied().flatten())
    }

    pub fn feedback(&self) -> &str {
        self.grade
            .as_ref()
            .map_or(INITIAL_FEEDBACK, |g| g.feedback.as_str())
    }

    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    /// Record a selection (or its absence) and regrade.
    pub fn select(&mut self, option: Option<usize>) -> &Grade {
        self.grade.insert(grade(&self.question, option))
    }
}

/// A rendered quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    questions: Vec<QuestionView>,
}

/// Title shown above the questions.
pub const QUIZ_TITLE: &str = "Quiz";

impl QuizView {
    pub fn new(doc: &QuizDocument) -> Self {
        Self::from_questions(doc.questions.clone())
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: questions
                .into_iter()
                .enumerate()
                .map(|(i, q)| QuestionView::new(q, i + 1))
                .collect(),
        }
    }

    pub fn questions(&self) -> &[QuestionView] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&QuestionView> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Select `option` on question `index`; other questions are untouched.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn select(&mut self, index: usize, option: Option<usize>) -> Option<&Grade> {
        self.questions.get_mut(index).map(|q| q.select(option))
    }

    /// `(correct, answered, total)` over all questions.
    pub fn score(&self) -> Score {
        let mut score = Score {
            total: self.questions.len(),
            ..Score::default()
        };
        for grade in self.questions.iter().filter_map(QuestionView::grade) {
            if grade.selected.is_some() {
                score.answered += 1;
            }
            if grade.is_correct() {
                score.correct += 1;
            }
        }
        score
    }
}

/// Tally of a quiz attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {}/{}", self.correct, self.total)
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
