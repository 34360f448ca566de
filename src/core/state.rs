//! Session state.
//!
//! ## GameState
//!
//! Everything one game session owns:
//! - Resource pool
//! - Deck, hand and discard (via `ZoneManager`)
//! - Turn counter and outcome
//! - Game log
//! - RNG
//!
//! There is no global instance: each session holds its own `GameState`, and
//! the rules engine receives it explicitly.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::log::LogEntry;
use super::resources::ResourcePool;
use super::rng::GameRng;
use crate::cards::CardId;
use crate::zones::ZoneManager;

/// Progress of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Still being played.
    #[default]
    InProgress,
    /// Victory threshold reached.
    Won,
    /// Out of money with an empty hand.
    Lost,
}

impl Outcome {
    /// Check if the session has been decided.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::InProgress => "in-progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        })
    }
}

/// Full state of one game session.
///
/// Uses an `im` persistent vector for the log so cloning a state (for views
/// or what-if copies) does not copy the history.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current resource pool.
    pub resources: ResourcePool,

    /// Deck, hand and discard.
    pub zones: ZoneManager,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Session outcome.
    pub outcome: Outcome,

    /// Game log, oldest first.
    pub log: Vector<LogEntry>,

    /// Deterministic RNG used for every shuffle.
    pub rng: GameRng,

    /// Next log sequence number.
    log_sequence: u32,

    /// Size of the card multiset fixed at game start.
    card_count: usize,
}

impl GameState {
    /// Create a new state with the given pool and an empty deck.
    #[must_use]
    pub fn new(resources: ResourcePool, seed: u64) -> Self {
        Self::with_rng(resources, GameRng::new(seed))
    }

    /// Create a new state driven by an existing RNG.
    #[must_use]
    pub fn with_rng(resources: ResourcePool, rng: GameRng) -> Self {
        Self {
            resources,
            zones: ZoneManager::new(),
            turn_number: 1,
            outcome: Outcome::InProgress,
            log: Vector::new(),
            rng,
            log_sequence: 0,
            card_count: 0,
        }
    }

    /// Seed of the session RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Cards ===

    /// Install the full card multiset as a freshly shuffled deck.
    ///
    /// Hand and discard are emptied; the multiset size becomes the
    /// conservation total for the rest of the session.
    pub fn install_deck(&mut self, cards: Vec<CardId>) {
        self.card_count = cards.len();
        self.zones.initialize_deck(cards, &mut self.rng);
    }

    /// Replace the piles with an explicit layout.
    ///
    /// The conservation total is reset to the new layout's size.
    pub fn replace_zones(&mut self, zones: ZoneManager) {
        self.card_count = zones.total_cards();
        self.zones = zones;
    }

    /// Draw until the hand holds `hand_size` cards or nothing is left.
    pub fn draw_hand(&mut self, hand_size: usize) -> usize {
        self.zones.draw_hand(hand_size, &mut self.rng)
    }

    /// Discard the whole hand and draw a new one.
    pub fn refresh_hand(&mut self, hand_size: usize) -> usize {
        self.zones.refresh_hand(hand_size, &mut self.rng)
    }

    /// Number of cards defined at game start.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Check that deck + discard + hand still hold the starting multiset size.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.zones.total_cards() == self.card_count
    }

    // === Log ===

    /// Append a log entry for a played card at the current turn.
    pub fn record_play(&mut self, card: CardId, message: impl Into<String>) {
        let seq = self.next_sequence();
        self.log
            .push_back(LogEntry::played(card, message, self.turn_number, seq));
    }

    /// Append a log entry that is not tied to a card.
    pub fn record_notice(&mut self, message: impl Into<String>) {
        let seq = self.next_sequence();
        self.log
            .push_back(LogEntry::notice(message, self.turn_number, seq));
    }

    /// Rendered log lines, oldest first.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }

    fn next_sequence(&mut self) -> u32 {
        let seq = self.log_sequence;
        self.log_sequence = self.log_sequence.saturating_add(1);
        seq
    }

    // === Turn Advancement ===

    /// Advance the turn counter.
    pub fn advance_turn(&mut self) {
        self.turn_number = self.turn_number.saturating_add(1);
    }
}
