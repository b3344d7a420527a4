// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Answer input parsing for terminal quiz sessions.
//!
//! An answer names an option by letter (`B`), by one-based number (`2`),
//! or by its exact text ignoring case (`false`). An empty answer or `-`
//! skips the question.

/// Errors from parsing an answer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerParseError {
    #[error("'{input}' is not an option (expected {expected})")]
    Unknown { input: String, expected: String },

    #[error("{given} answers given for {questions} questions")]
    Count { given: usize, questions: usize },
}

/// Letter label for option `index` (`A`, `B`, ...).
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

/// Parse one answer against the options it selects from.
pub fn parse_answer(input: &str, options: &[String]) -> Result<Option<usize>, AnswerParseError> {
    let input = input.trim();
    if input.is_empty() || input == "-" {
        return Ok(None);
    }

    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            if index < options.len() {
                return Ok(Some(index));
            }
        }
    }

    if let Ok(n) = input.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Ok(Some(n - 1));
        }
    }

    if let Some(index) = options.iter().position(|o| o.eq_ignore_ascii_case(input)) {
        return Ok(Some(index));
    }

    Err(AnswerParseError::Unknown {
        input: input.to_string(),
        expected: expected_labels(options.len()),
    })
}

/// Split a comma-separated answer list, one entry per question.
pub fn split_answer_list(list: &str, questions: usize) -> Result<Vec<String>, AnswerParseError> {
    let answers: Vec<String> = list.split(',').map(|a| a.trim().to_string()).collect();
    if answers.len() != questions {
        return Err(AnswerParseError::Count {
            given: answers.len(),
            questions,
        });
    }
    Ok(answers)
}

fn expected_labels(count: usize) -> String {
    match count {
        0 => "no options".to_string(),
        1 => "A or 1".to_string(),
        n => format!("A-{} or 1-{}", option_label(n - 1), n),
    }
}

#[cfg(test)]
#[path = "answers_tests.rs"]
mod tests;
