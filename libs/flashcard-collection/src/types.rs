//! Core types for the flashcard collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a card for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated question/answer pair, not yet placed in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub question: String,
    pub answer: String,
}

impl CardPair {
    /// Build a pair, returning `None` if either side is blank.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Option<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return None;
        }
        Some(Self { question, answer })
    }
}

/// Card owned by a [`CardStore`](crate::store::CardStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    /// View state only; never affects order or membership.
    pub flipped: bool,
}

impl Card {
    pub(crate) fn from_pair(id: CardId, pair: CardPair) -> Self {
        Self {
            id,
            question: pair.question,
            answer: pair.answer,
            flipped: false,
        }
    }
}

/// State of the two-step delete-all flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum DeleteState {
    Idle,
    PendingConfirmation { card_count: usize },
}

impl Default for DeleteState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Seed for the shuffle RNG. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
    /// Require a confirmation step before deleting every card.
    pub confirm_delete_all: bool,
    /// Emit a notice when a preset adds cards.
    pub notify_on_preset: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            confirm_delete_all: true,
            notify_on_preset: true,
        }
    }
}
