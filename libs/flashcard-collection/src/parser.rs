//! Parser for user-typed card sets.
//!
//! # Format
//! Questions and answers are typed into two separate fields, each a
//! comma-separated list. Fragments pair up by position:
//! ```text
//! questions: あ, い, う
//! answers:   a, i, u
//! ```
//!
//! The fragment counts are compared before blank fragments are discarded, so
//! `"a,,b"` against `"1,2"` is a count mismatch while `"a,,b"` against
//! `"1,2,"` yields the single pair `(a, 1)`.

use crate::error::{ParseError, Result};
use crate::types::CardPair;

const DELIMITER: char = ',';

/// Parse raw question and answer text into validated pairs.
pub fn parse(questions_raw: &str, answers_raw: &str) -> Result<Vec<CardPair>> {
    let questions_text = questions_raw.trim();
    let answers_text = answers_raw.trim();

    if questions_text.is_empty() || answers_text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let questions: Vec<&str> = questions_text.split(DELIMITER).collect();
    let answers: Vec<&str> = answers_text.split(DELIMITER).collect();

    if questions.len() != answers.len() {
        return Err(ParseError::CountMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    let pairs = questions
        .into_iter()
        .zip(answers)
        .filter_map(|(question, answer)| {
            let question = question.trim();
            let answer = answer.trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            Some(CardPair {
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect();

    Ok(pairs)
}
