// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Front-end independent session state.
//!
//! A [`Workbench`] holds everything an interactive front end shows: the
//! prompt parameters, the composed prompt, the pasted response, the
//! rendered results and the current notice. Each method corresponds to
//! one user action and leaves the state ready to redraw.

use quizsmith_core::notice::Notifier;
use quizsmith_core::prompt::{clamp_question_count, PromptOptions};
use quizsmith_core::time::Clock;
use quizsmith_core::validate::{parse_response, ResponseError, ValidationErrors};
use quizsmith_core::{Grade, QuizView};
use std::time::Duration;

use crate::clipboard::{Clipboard, ClipboardError};

/// Notice texts, one per outcome.
pub mod messages {
    pub const PROMPT_BUILT: &str = "Prompt built.";
    pub const NOTHING_TO_COPY: &str = "Nothing to copy.";
    pub const PROMPT_COPIED: &str = "Prompt copied.";
    pub const COPY_FAILED: &str = "Unable to copy to clipboard.";
    pub const PASTE_UNSUPPORTED: &str = "Clipboard paste is not supported here.";
    pub const CLIPBOARD_EMPTY: &str = "Clipboard is empty.";
    pub const PASTED: &str = "Pasted JSON from clipboard.";
    pub const PASTE_FAILED: &str = "Unable to paste from clipboard.";
    pub const RESPONSE_MISSING: &str = "Paste the AI JSON response first.";
    pub const INVALID_JSON: &str = "Invalid JSON. Make sure it is JSON ONLY.";
    pub const VALIDATION_FAILED: &str = "AI response failed validation.";
    pub const QUIZ_RENDERED: &str = "Quiz rendered.";
}

/// What the results area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Results {
    #[default]
    Empty,
    /// Itemized validation errors; no question is rendered
    Errors(ValidationErrors),
    Quiz(QuizView),
}

/// Outcome of a render attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    MissingInput,
    InvalidJson,
    Invalid,
    Rendered,
}

/// Session state for one user.
pub struct Workbench<C: Clock> {
    total_questions: String,
    difficulty: String,
    include_true_false: bool,
    prompt: String,
    response: String,
    results: Results,
    notifier: Notifier<C>,
}

impl<C: Clock> Workbench<C> {
    pub fn new(options: &PromptOptions, clock: C, notice_duration: Duration) -> Self {
        Self {
            total_questions: options.total_questions.to_string(),
            difficulty: options.difficulty.clone(),
            include_true_false: options.include_true_false,
            prompt: String::new(),
            response: String::new(),
            results: Results::Empty,
            notifier: Notifier::with_duration(clock, notice_duration),
        }
    }

    /// Raw question count as the user typed it.
    pub fn set_total_questions(&mut self, raw: impl Into<String>) {
        self.total_questions = raw.into();
    }

    pub fn total_questions(&self) -> &str {
        &self.total_questions
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.difficulty = difficulty.into();
    }

    pub fn set_include_true_false(&mut self, include: bool) {
        self.include_true_false = include;
    }

    pub fn set_response(&mut self, response: impl Into<String>) {
        self.response = response.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn notifier(&self) -> &Notifier<C> {
        &self.notifier
    }

    /// Message of the notice that is still visible, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notifier.current().map(|n| n.message.as_str())
    }

    /// Message of the last notice, visible or not.
    pub fn last_notice(&self) -> Option<&str> {
        self.notifier.last().map(|n| n.message.as_str())
    }

    /// Clamp the count, normalize the field, and compose the prompt.
    pub fn build_prompt(&mut self) -> &str {
        let total = clamp_question_count(&self.total_questions);
        self.total_questions = total.to_string();
        let options = PromptOptions::new(total, self.difficulty.clone(), self.include_true_false);
        self.prompt = options.compose();
        self.notifier.show(messages::PROMPT_BUILT);
        &self.prompt
    }

    /// Copy the composed prompt to `clipboard`.
    pub fn copy_prompt(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let text = self.prompt.trim();
        if text.is_empty() {
            self.notifier.show(messages::NOTHING_TO_COPY);
            return false;
        }
        match clipboard.write_text(text) {
            Ok(()) => {
                self.notifier.show(messages::PROMPT_COPIED);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                self.notifier.show(messages::COPY_FAILED);
                false
            }
        }
    }

    /// Replace the response with the clipboard contents.
    ///
    /// On any failure the current response is left as it was.
    pub fn paste_response(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.read_text() {
            Ok(text) if text.trim().is_empty() => {
                self.notifier.show(messages::CLIPBOARD_EMPTY);
                false
            }
            Ok(text) => {
                self.response = text;
                self.notifier.show(messages::PASTED);
                true
            }
            Err(ClipboardError::Unsupported) => {
                self.notifier.show(messages::PASTE_UNSUPPORTED);
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "paste from clipboard failed");
                self.notifier.show(messages::PASTE_FAILED);
                false
            }
        }
    }

    /// Parse, validate and render the pasted response.
    ///
    /// Malformed JSON leaves the results untouched. A schema violation
    /// replaces them with the error list, and nothing of the quiz is shown.
    pub fn render(&mut self) -> RenderOutcome {
        match parse_response(&self.response) {
            Err(ResponseError::Empty) => {
                self.notifier.show(messages::RESPONSE_MISSING);
                RenderOutcome::MissingInput
            }
            Err(ResponseError::Parse(e)) => {
                tracing::debug!(error = %e, "response is not JSON");
                self.notifier.show(messages::INVALID_JSON);
                RenderOutcome::InvalidJson
            }
            Err(ResponseError::Invalid(errors)) => {
                tracing::info!(errors = errors.len(), "response failed validation");
                self.results = Results::Errors(errors);
                self.notifier.show(messages::VALIDATION_FAILED);
                RenderOutcome::Invalid
            }
            Ok(doc) => {
                tracing::info!(questions = doc.questions.len(), "quiz rendered");
                self.results = Results::Quiz(QuizView::new(&doc));
                self.notifier.show(messages::QUIZ_RENDERED);
                RenderOutcome::Rendered
            }
        }
    }

    /// Select an option on a rendered question.
    pub fn select_answer(&mut self, question: usize, option: Option<usize>) -> Option<&Grade> {
        match &mut self.results {
            Results::Quiz(view) => view.select(question, option),
            _ => None,
        }
    }

    pub fn quiz(&self) -> Option<&QuizView> {
        match &self.results {
            Results::Quiz(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "workbench_tests.rs"]
mod tests;
