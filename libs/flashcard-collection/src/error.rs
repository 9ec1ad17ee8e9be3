//! Error types for flashcard-collection.

use crate::types::CardId;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Result type alias using CollectionError.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// Errors that can occur while parsing user-typed card text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("questions and answers must not be empty")]
    EmptyInput,

    #[error("questions ({questions}) and answers ({answers}) differ in count")]
    CountMismatch { questions: usize, answers: usize },
}

/// Errors surfaced by collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no cards to delete")]
    NothingToDelete,

    #[error("no delete-all request is awaiting confirmation")]
    NoPendingDelete,

    #[error("card not found: {0}")]
    CardNotFound(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_display_carries_both_counts() {
        let error = ParseError::CountMismatch {
            questions: 2,
            answers: 3,
        };
        assert_eq!(
            error.to_string(),
            "questions (2) and answers (3) differ in count"
        );
    }

    #[test]
    fn parse_error_converts_transparently() {
        let error: CollectionError = ParseError::EmptyInput.into();
        assert_eq!(error, CollectionError::Parse(ParseError::EmptyInput));
        assert_eq!(error.to_string(), "questions and answers must not be empty");
    }

    #[test]
    fn card_not_found_display() {
        let error = CollectionError::CardNotFound(CardId(7));
        assert_eq!(error.to_string(), "card not found: #7");
    }
}
