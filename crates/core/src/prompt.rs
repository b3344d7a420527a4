// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt composition for the quiz generation service.
//!
//! The composed text is the contract the service is asked to honor: the
//! schema example and hard rules it embeds mirror what
//! [`crate::validate`] enforces on the reply.

use serde_json::{json, Value};

/// Smallest question count a prompt may request.
pub const MIN_QUESTIONS: u32 = 1;
/// Largest question count a prompt may request.
pub const MAX_QUESTIONS: u32 = 500;

const TRUE_FALSE_ALLOWED: &str = "You MAY include true/false questions as part of the TOTAL (0%–25%). If you include a true/false question, set \"type\" to \"true_false\", set \"options\" to exactly [\"True\",\"False\"], set \"correct_index\" to 0 or 1, and include feedback keys \"0\",\"1\",\"correct\" (all non-empty). Do NOT force TF per section.";

const TRUE_FALSE_FORBIDDEN: &str =
    "Do NOT include any true/false questions. Every question must have \"type\": \"mcq\".";

const SCHEMA_EXAMPLE: &[&str] = &[
    "{",
    "  \"questions\": [",
    "    {",
    "      \"question\": \"string (non-empty)\",",
    "      \"type\": \"mcq\",",
    "      \"options\": [\"A\",\"B\",\"C\",\"D\"],",
    "      \"correct_index\": 0,",
    "      \"feedback\": {",
    "        \"0\": \"non-empty\",",
    "        \"1\": \"non-empty\",",
    "        \"2\": \"non-empty\",",
    "        \"3\": \"non-empty\",",
    "        \"correct\": \"non-empty\"",
    "      }",
    "    },",
    "    {",
    "      \"question\": \"string (non-empty)\",",
    "      \"type\": \"true_false\",",
    "      \"options\": [\"True\",\"False\"],",
    "      \"correct_index\": 0,",
    "      \"feedback\": {",
    "        \"0\": \"non-empty\",",
    "        \"1\": \"non-empty\",",
    "        \"correct\": \"non-empty\"",
    "      }",
    "    }",
    "  ]",
    "}",
];

const HARD_RULES: &[&str] = &[
    "Hard validation rules (must pass):",
    "- Every question MUST include feedback.correct as a non-empty string.",
    "- feedback.correct must be >= 10 characters and cannot be filler (\"N/A\", \"none\", \"no feedback\").",
    "- If type=\"mcq\": options length MUST be 4 and feedback MUST include keys \"0\",\"1\",\"2\",\"3\",\"correct\" (all non-empty).",
    "- If type=\"true_false\": options MUST be exactly [\"True\",\"False\"] and feedback MUST include keys \"0\",\"1\",\"correct\" (all non-empty).",
    "- Use correct \"type\" values: \"mcq\" or \"true_false\".",
    "",
    "Important constraints:",
    "- Do not include anything outside the schema.",
    "- Do not include trailing commas.",
    "- Do not include markdown fences.",
];

/// Parameters the user picks before composing a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptOptions {
    pub total_questions: u32,
    pub difficulty: String,
    pub include_true_false: bool,
}

impl PromptOptions {
    pub fn new(total_questions: u32, difficulty: impl Into<String>, include_true_false: bool) -> Self {
        Self {
            total_questions: clamp_count(i64::from(total_questions)),
            difficulty: difficulty.into(),
            include_true_false,
        }
    }

    /// Render the prompt for these options.
    pub fn compose(&self) -> String {
        compose(self.total_questions, &self.difficulty, self.include_true_false)
    }
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self::new(20, "medium", false)
    }
}

/// Clamp user-entered question count text to `[1, 500]`.
///
/// Reads the leading integer of the text the way a lenient form field
/// would: surrounding whitespace and trailing junk are ignored (`"12abc"`
/// is 12, `"7.9"` is 7). Text without a leading integer clamps to 1.
pub fn clamp_question_count(input: &str) -> u32 {
    match leading_integer(input) {
        Some(n) => clamp_count(n),
        None => MIN_QUESTIONS,
    }
}

fn clamp_count(n: i64) -> u32 {
    n.clamp(i64::from(MIN_QUESTIONS), i64::from(MAX_QUESTIONS)) as u32
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Saturate on overflow; any huge value clamps to the upper bound anyway.
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Compose the instruction document.
///
/// Deterministic: identical inputs produce byte-identical output.
pub fn compose(total_questions: u32, difficulty: &str, include_true_false: bool) -> String {
    let total = clamp_count(i64::from(total_questions));
    let tf_rule = if include_true_false {
        TRUE_FALSE_ALLOWED
    } else {
        TRUE_FALSE_FORBIDDEN
    };

    let mut lines: Vec<String> = vec![
        "You will be given a file (PDF/Doc/Slides). Read the file content and generate a quiz that is answerable ONLY from that file.".into(),
        String::new(),
        "Requirements:".into(),
        format!("- Produce EXACTLY {total} questions TOTAL."),
        format!("- Difficulty: {difficulty}. Hard means subtle traps / near-miss distractors, but still answerable from the file."),
        "- Output MUST be valid JSON ONLY (no markdown, no extra text).".into(),
        format!("- {tf_rule}"),
        String::new(),
        "For MCQ questions:".into(),
        "- Each MCQ must have EXACTLY 4 options (strings). Exactly ONE option is correct.".into(),
        "- Provide feedback (rationale) for why each option is incorrect AND include feedback.correct explaining why the correct option is correct.".into(),
        "- feedback.correct must be a specific, content-based rationale (>=10 characters).".into(),
        "- All feedback strings must be NON-EMPTY (no placeholders like \"N/A\", \"none\", \"\", or \"--\").".into(),
        String::new(),
        "JSON schema (follow exactly):".into(),
    ];
    lines.extend(SCHEMA_EXAMPLE.iter().map(|l| (*l).to_string()));
    lines.push(String::new());
    lines.extend(HARD_RULES.iter().map(|l| (*l).to_string()));

    tracing::debug!(total, difficulty, include_true_false, "composed prompt");
    lines.join("\n")
}

/// The schema example embedded in every prompt, as a JSON value.
pub fn schema_example() -> Value {
    json!({
        "questions": [
            {
                "question": "string (non-empty)",
                "type": "mcq",
                "options": ["A", "B", "C", "D"],
                "correct_index": 0,
                "feedback": {
                    "0": "non-empty",
                    "1": "non-empty",
                    "2": "non-empty",
                    "3": "non-empty",
                    "correct": "non-empty"
                }
            },
            {
                "question": "string (non-empty)",
                "type": "true_false",
                "options": ["True", "False"],
                "correct_index": 0,
                "feedback": {
                    "0": "non-empty",
                    "1": "non-empty",
                    "correct": "non-empty"
                }
            }
        ]
    })
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
