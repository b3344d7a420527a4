// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::validate::parse_response;

const QUIZ: &str = r#"{
  "questions": [
    {
      "question": "What does DNS resolve?",
      "options": ["Names to addresses", "Addresses to MACs", "Ports", "Routes"],
      "correct_index": 0,
      "feedback": {
        "0": "Yes.",
        "1": "That is ARP.",
        "2": "Ports are not resolved.",
        "3": "Routes come from routing protocols.",
        "correct": "DNS maps host names to IP addresses."
      }
    },
    {
      "question": "UDP is connection oriented.",
      "type": "true_false",
      "options": ["True", "False"],
      "correct_index": 1,
      "feedback": {
        "0": "UDP has no handshake.",
        "1": "Right.",
        "correct": "UDP is connectionless."
      }
    }
  ]
}"#;

fn view() -> QuizView {
    QuizView::new(&parse_response(QUIZ).unwrap())
}

#[test]
fn headings_are_numbered_and_flag_true_false() {
    let view = view();
    assert_eq!(view.len(), 2);
    assert_eq!(view.questions()[0].heading(), "1) What does DNS resolve?");
    assert_eq!(view.questions()[1].heading(), "2) UDP is connection oriented. (T/F)");
}

#[test]
fn fresh_view_shows_prompt_feedback() {
    let view = view();
    let q = view.get(0).unwrap();
    assert_eq!(q.feedback(), "Select an answer to see feedback.");
    assert_eq!(q.selected(), None);
    assert_eq!(q.tag(0), None);
}

#[test]
fn selecting_regrades_only_that_question() {
    let mut view = view();
    view.select(1, Some(0)).unwrap();

    let tf = view.get(1).unwrap();
    assert_eq!(tf.tag(0), Some(OptionTag::Wrong));
    assert_eq!(tf.tag(1), Some(OptionTag::Correct));
    assert_eq!(
        tf.feedback(),
        "UDP has no handshake.\n\nWhy the correct answer is correct:\nUDP is connectionless."
    );
    assert_eq!(view.get(0).unwrap().feedback(), INITIAL_FEEDBACK);
}

#[test]
fn changing_selection_replaces_tags() {
    let mut view = view();
    view.select(0, Some(2));
    view.select(0, Some(0));
    let q = view.get(0).unwrap();
    assert_eq!(q.tag(2), None);
    assert_eq!(q.tag(0), Some(OptionTag::Correct));
    assert_eq!(q.feedback(), "DNS maps host names to IP addresses.");
}

#[test]
fn select_out_of_range_question_is_none() {
    assert!(view().select(5, Some(0)).is_none());
}

#[test]
fn score_counts_answers() {
    let mut view = view();
    assert_eq!(view.score(), Score { correct: 0, answered: 0, total: 2 });

    view.select(0, Some(0));
    view.select(1, Some(0));
    let score = view.score();
    assert_eq!(score, Score { correct: 1, answered: 2, total: 2 });
    assert_eq!(score.to_string(), "Score: 1/2");

    view.select(1, None);
    assert_eq!(view.score().answered, 1);
}
