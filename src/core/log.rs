//! Game log records.
//!
//! Every successful play appends a `LogEntry`. The log is the engine's
//! history: it is what the presentation layer shows, and what tests use to
//! check that an action was taken.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A recorded event in the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number when the entry was written.
    pub turn: u32,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,

    /// The card that produced this entry. `None` for the welcome line.
    pub card: Option<CardId>,

    /// Human-readable description.
    pub message: String,
}

impl LogEntry {
    /// Create an entry for a played card.
    #[must_use]
    pub fn played(card: CardId, message: impl Into<String>, turn: u32, sequence: u32) -> Self {
        Self {
            turn,
            sequence,
            card: Some(card),
            message: message.into(),
        }
    }

    /// Create an entry that is not tied to a card.
    #[must_use]
    pub fn notice(message: impl Into<String>, turn: u32, sequence: u32) -> Self {
        Self {
            turn,
            sequence,
            card: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card {
            Some(_) => write!(f, "Turn {}: {}", self.turn, self.message),
            None => f.write_str(&self.message),
        }
    }
}
