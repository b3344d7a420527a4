// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz prompt composition, response validation and grading.
//!
//! The flow this crate supports:
//!
//! 1. [`prompt::compose`] renders an instruction document for a text
//!    generation service from a question count, a difficulty label and a
//!    true/false toggle.
//! 2. The service replies with a JSON quiz. [`validate::parse_response`]
//!    parses it, checks it against the quiz schema and decodes it into a
//!    [`QuizDocument`].
//! 3. [`view::QuizView`] holds the rendered quiz and regrades a question
//!    through [`grade::grade`] on every answer selection.

pub mod grade;
pub mod model;
pub mod notice;
pub mod prompt;
pub mod time;
pub mod validate;
pub mod view;

pub use grade::{grade, Grade, OptionTag};
pub use model::{Feedback, Question, QuestionKind, QuizDocument};
pub use notice::{Notice, Notifier};
pub use prompt::{clamp_question_count, compose, PromptOptions};
pub use validate::{decode, parse_response, validate, ResponseError, ValidationError, ValidationErrors};
pub use view::{QuestionView, QuizView, Score};
