//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which cards in hand are playable
//! - How a play modifies state
//! - Win/loss conditions

use crate::cards::{Catalog, CardId};
use crate::core::config::GameConfig;
use crate::core::state::{GameState, Outcome};
use crate::effects::EffectResolver;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Scoring resource reached the victory threshold.
    Victory,
    /// Scoring resource exhausted with nothing left to play.
    Defeat,
}

impl GameResult {
    /// The session outcome this result settles on.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self {
            GameResult::Victory => Outcome::Won,
            GameResult::Defeat => Outcome::Lost,
        }
    }
}

/// Why a play was rejected.
///
/// A rejected play never changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    /// Index outside the current hand.
    InvalidSelection,
    /// The card's costs cannot be covered.
    InsufficientResources,
    /// The session is decided and plays are locked.
    GameOver,
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PlayError::InvalidSelection => "invalid selection",
            PlayError::InsufficientResources => "cannot play this card - insufficient resources",
            PlayError::GameOver => "the game is over",
        })
    }
}

impl std::error::Error for PlayError {}

/// What a successful play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayRecord {
    /// The card that was played.
    pub card: CardId,
    /// Log message written for the play.
    pub message: String,
    /// Whether the hand was replaced.
    pub redrew_hand: bool,
    /// Outcome after the play.
    pub outcome: Outcome,
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules.
/// A session calls these methods for every play.
///
/// ## Implementation Notes
///
/// - `apply_play`: Must leave `state` untouched when it returns `Err`
/// - `is_terminal`: Return None if game continues
/// - The default `is_terminal` checks victory before defeat
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the card catalog.
    fn catalog(&self) -> &Catalog;

    /// Play the card at `hand_index`.
    ///
    /// Must be deterministic given the state's RNG.
    fn apply_play(&self, state: &mut GameState, hand_index: usize) -> Result<PlayRecord, PlayError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let config = self.config();
        let score = state.resources.get(&config.scoring_resource);

        if score >= config.victory_threshold {
            Some(GameResult::Victory)
        } else if score == 0 && state.zones.hand().is_empty() {
            Some(GameResult::Defeat)
        } else {
            None
        }
    }

    // === Convenience Methods ===

    /// Check whether a card's costs can be covered by the current pool.
    fn can_play(&self, state: &GameState, card: CardId) -> bool {
        self.catalog()
            .get(card)
            .is_some_and(|def| EffectResolver::can_resolve(&def.effect, &state.resources))
    }

    /// Check whether the session still takes plays.
    fn accepts_plays(&self, state: &GameState) -> bool {
        !(self.config().lock_on_outcome && state.outcome.is_terminal())
    }

    /// Hand indices that can be played right now.
    fn legal_plays(&self, state: &GameState) -> Vec<usize> {
        if !self.accepts_plays(state) {
            return Vec::new();
        }
        state
            .zones
            .hand()
            .iter()
            .enumerate()
            .filter(|&(_, &card)| self.can_play(state, card))
            .map(|(index, _)| index)
            .collect()
    }

    /// Settle the outcome if the game just ended.
    ///
    /// A decided outcome is never reverted.
    fn check_game_end(&self, state: &mut GameState) -> Outcome {
        if !state.outcome.is_terminal() {
            if let Some(result) = self.is_terminal(state) {
                state.outcome = result.outcome();
            }
        }
        state.outcome
    }
}
