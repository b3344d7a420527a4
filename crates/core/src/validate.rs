// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema validation for quiz responses.
//!
//! Validation runs over an untyped [`serde_json::Value`] so that every rule
//! violation can be reported, not just the first one serde would hit.
//! A missing `questions` array aborts immediately. Otherwise every question
//! is checked independently, and within a question a structural failure
//! (unknown `type`, malformed `options`, non-object `feedback`) skips the
//! checks that depend on it.
//!
//! Shape checks follow JSON-in-the-browser semantics: arrays count as
//! objects, and keyed lookup into an array reads the element at that
//! decimal index.

use crate::model::{Feedback, Question, QuestionKind, QuizDocument};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single schema rule violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Root must be a JSON object.")]
    RootNotObject,
    #[error("Root must contain \"questions\" as an array.")]
    MissingQuestions,
    #[error("No questions found.")]
    NoQuestions,
    #[error("questions[{index}] must be an object.")]
    QuestionNotObject { index: usize },
    #[error("questions[{index}].question must be a non-empty string.")]
    QuestionText { index: usize },
    #[error("questions[{index}].type must be \"mcq\" or \"true_false\".")]
    UnknownType { index: usize },
    #[error("questions[{index}].options must be an array of non-empty strings.")]
    OptionsNotStrings { index: usize },
    #[error("questions[{index}].options must be an array of 4 strings.")]
    McqOptionCount { index: usize },
    #[error("questions[{index}].options must be exactly [\"True\",\"False\"] for true_false.")]
    TrueFalseOptions { index: usize },
    #[error("questions[{index}].correct_index must be an integer in [0..{max}].")]
    CorrectIndex { index: usize, max: usize },
    #[error("questions[{index}].feedback must be an object.")]
    FeedbackNotObject { index: usize },
    #[error("questions[{index}].feedback.correct must be a non-empty string.")]
    FeedbackCorrect { index: usize },
    #[error("questions[{index}].feedback[\"{key}\"] must be a non-empty string.")]
    FeedbackOption { index: usize, key: String },
}

impl ValidationError {
    /// Index of the offending question, `None` for root-level errors.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::RootNotObject | Self::MissingQuestions | Self::NoQuestions => None,
            Self::QuestionNotObject { index }
            | Self::QuestionText { index }
            | Self::UnknownType { index }
            | Self::OptionsNotStrings { index }
            | Self::McqOptionCount { index }
            | Self::TrueFalseOptions { index }
            | Self::CorrectIndex { index, .. }
            | Self::FeedbackNotObject { index }
            | Self::FeedbackCorrect { index }
            | Self::FeedbackOption { index, .. } => Some(*index),
        }
    }

    /// Path of the offending field, relative to the question.
    pub fn field(&self) -> String {
        match self {
            Self::RootNotObject => "$".to_string(),
            Self::MissingQuestions | Self::NoQuestions | Self::QuestionNotObject { .. } => {
                "questions".to_string()
            }
            Self::QuestionText { .. } => "question".to_string(),
            Self::UnknownType { .. } => "type".to_string(),
            Self::OptionsNotStrings { .. }
            | Self::McqOptionCount { .. }
            | Self::TrueFalseOptions { .. } => "options".to_string(),
            Self::CorrectIndex { .. } => "correct_index".to_string(),
            Self::FeedbackNotObject { .. } => "feedback".to_string(),
            Self::FeedbackCorrect { .. } => "feedback.correct".to_string(),
            Self::FeedbackOption { key, .. } => format!("feedback[\"{key}\"]"),
        }
    }
}

/// Every violation found in one document, in rule order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Why a pasted response could not be turned into a quiz.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Paste the AI JSON response first.")]
    Empty,
    #[error("Invalid JSON. Make sure it is JSON ONLY.")]
    Parse(#[source] serde_json::Error),
    #[error("AI response failed validation.")]
    Invalid(#[source] ValidationErrors),
}

/// Check a parsed document against the quiz schema.
///
/// Returns every violation found; an empty list means the document is valid.
pub fn validate(doc: &Value) -> Vec<ValidationError> {
    let (errors, _) = check_document(doc);
    errors
}

/// Validate and decode a parsed document.
pub fn decode(doc: &Value) -> Result<QuizDocument, ValidationErrors> {
    let (errors, questions) = check_document(doc);
    tracing::debug!(errors = errors.len(), questions = questions.len(), "decoded quiz document");
    if errors.is_empty() {
        Ok(QuizDocument { questions })
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Parse, validate and decode raw response text.
///
/// Malformed JSON is reported before any schema rule runs.
pub fn parse_response(raw: &str) -> Result<QuizDocument, ResponseError> {
    let raw = trim_blank(raw);
    if raw.is_empty() {
        return Err(ResponseError::Empty);
    }
    let doc: Value = serde_json::from_str(raw).map_err(ResponseError::Parse)?;
    decode(&doc).map_err(ResponseError::Invalid)
}

/// Single pass that collects violations and, for each question that has
/// none, its typed form.
fn check_document(doc: &Value) -> (Vec<ValidationError>, Vec<Question>) {
    let mut errors = Vec::new();
    let mut questions = Vec::new();

    if !is_object_like(doc) {
        errors.push(ValidationError::RootNotObject);
        return (errors, questions);
    }
    let Some(Value::Array(items)) = member(doc, "questions") else {
        errors.push(ValidationError::MissingQuestions);
        return (errors, questions);
    };
    if items.is_empty() {
        errors.push(ValidationError::NoQuestions);
    }

    for (index, item) in items.iter().enumerate() {
        if let Some(question) = check_question(index, item, &mut errors) {
            questions.push(question);
        }
    }
    (errors, questions)
}

fn check_question(index: usize, q: &Value, errors: &mut Vec<ValidationError>) -> Option<Question> {
    if !is_object_like(q) {
        errors.push(ValidationError::QuestionNotObject { index });
        return None;
    }
    let before = errors.len();

    let text = non_empty_str(member(q, "question"));
    if text.is_none() {
        errors.push(ValidationError::QuestionText { index });
    }

    let Some(kind) = resolve_kind(member(q, "type")) else {
        errors.push(ValidationError::UnknownType { index });
        return None;
    };

    let Some(options) = string_options(member(q, "options")) else {
        errors.push(ValidationError::OptionsNotStrings { index });
        return None;
    };
    match kind {
        QuestionKind::Mcq if options.len() != kind.option_count() => {
            errors.push(ValidationError::McqOptionCount { index });
        }
        QuestionKind::TrueFalse if options != QuestionKind::TRUE_FALSE_OPTIONS => {
            errors.push(ValidationError::TrueFalseOptions { index });
        }
        _ => {}
    }

    let max = kind.max_index();
    let correct_index = index_in_range(member(q, "correct_index"), max);
    if correct_index.is_none() {
        errors.push(ValidationError::CorrectIndex { index, max });
    }

    let feedback = match member(q, "feedback") {
        Some(v) if is_object_like(v) => v,
        _ => {
            errors.push(ValidationError::FeedbackNotObject { index });
            return None;
        }
    };
    let correct = non_empty_str(member(feedback, "correct"));
    if correct.is_none() {
        errors.push(ValidationError::FeedbackCorrect { index });
    }
    let mut per_option = BTreeMap::new();
    for key in kind.feedback_keys() {
        match non_empty_str(member(feedback, key)) {
            Some(reason) => {
                per_option.insert((*key).to_string(), reason.to_string());
            }
            None => errors.push(ValidationError::FeedbackOption {
                index,
                key: (*key).to_string(),
            }),
        }
    }

    if errors.len() != before {
        return None;
    }
    Some(Question {
        question: text?.to_string(),
        kind,
        options: options.into_iter().map(str::to_string).collect(),
        correct_index: correct_index?,
        feedback: Feedback {
            correct: correct?.to_string(),
            options: per_option,
        },
    })
}

fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => {
            let index: usize = key.parse().ok()?;
            if index.to_string() != key {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}

/// Trim the ECMAScript whitespace and line terminator set.
///
/// That set is Unicode `White_Space` plus the byte-order mark, minus NEL.
fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_ecma_whitespace)
}

fn is_ecma_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// The string itself when it has non-blank content.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !trim_blank(s).is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// A missing or falsy `type` means `mcq`.
fn resolve_kind(value: Option<&Value>) -> Option<QuestionKind> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Some(QuestionKind::Mcq),
        Some(Value::String(s)) if s.is_empty() => Some(QuestionKind::Mcq),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            Some(QuestionKind::Mcq)
        }
        Some(Value::String(s)) => QuestionKind::from_label(s),
        Some(_) => None,
    }
}

fn string_options(value: Option<&Value>) -> Option<Vec<&str>> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    items
        .iter()
        .map(|item| non_empty_str(Some(item)))
        .collect()
}

/// Integral numbers (including `1.0`) within `[0, max]`.
fn index_in_range(value: Option<&Value>, max: usize) -> Option<usize> {
    let Some(Value::Number(n)) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return usize::try_from(u).ok().filter(|i| *i <= max);
    }
    if n.as_i64().is_some() {
        // Negative integers.
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= max as f64 {
        Some(f as usize)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
