//! Game configuration types.
//!
//! Games configure the engine at startup by providing a `GameConfig`:
//! - Hand size
//! - Scoring resource and victory threshold
//! - Turn counter policy
//! - Whether plays are rejected once the game is decided
//!
//! Card content lives in the `Catalog`, not here.

use serde::{Deserialize, Serialize};

/// When the turn counter advances.
///
/// `Fixed` is the default: the built-in games show the counter but never
/// move it. The other policies are opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// The counter stays at 1 for the whole session.
    #[default]
    Fixed,
    /// Every successful play advances the counter.
    PerPlay,
    /// Only plays that redraw the hand advance the counter.
    PerRedraw,
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use card_economy::core::{GameConfig, TurnPolicy};
///
/// let config = GameConfig::default()
///     .with_victory_threshold(500)
///     .with_turn_policy(TurnPolicy::PerPlay);
///
/// assert_eq!(config.hand_size, 4);
/// assert_eq!(config.victory_threshold, 500);
/// assert!(config.lock_on_outcome);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards held after a draw (4).
    pub hand_size: usize,

    /// Resource checked by the win/lose evaluator ("money").
    pub scoring_resource: String,

    /// Victory once the scoring resource reaches this value (300).
    pub victory_threshold: u32,

    /// Turn counter policy.
    pub turn_policy: TurnPolicy,

    /// Reject plays once the outcome is terminal.
    pub lock_on_outcome: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 4,
            scoring_resource: "money".to_string(),
            victory_threshold: 300,
            turn_policy: TurnPolicy::Fixed,
            lock_on_outcome: true,
        }
    }
}

impl GameConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the scoring resource.
    #[must_use]
    pub fn with_scoring_resource(mut self, resource: impl Into<String>) -> Self {
        self.scoring_resource = resource.into();
        self
    }

    /// Set the victory threshold.
    #[must_use]
    pub fn with_victory_threshold(mut self, threshold: u32) -> Self {
        self.victory_threshold = threshold;
        self
    }

    /// Set the turn policy.
    #[must_use]
    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.turn_policy = policy;
        self
    }

    /// Keep accepting plays after victory or defeat.
    #[must_use]
    pub fn allow_play_after_outcome(mut self) -> Self {
        self.lock_on_outcome = false;
        self
    }
}
