//! Game sessions: the interface a presentation layer drives.
//!
//! A `Session` owns one game's rules and state. It offers two operations,
//! `state()` and `play_card(index)`, plus constructors. Every session is an
//! independent value; several can run side by side.
//!
//! ## Usage
//!
//! ```
//! use card_economy::games::Variant;
//! use card_economy::session::Session;
//!
//! let mut session = Session::new_variant(Variant::FactoryEmpire, 42).unwrap();
//! let view = session.state();
//! assert_eq!(view.hand.len(), 4);
//!
//! if let Some(card) = view.hand.iter().find(|c| c.playable) {
//!     let report = session.play_card(card.index);
//!     assert!(report.success);
//! }
//! ```

mod view;

pub use view::{HandCardView, ResourceTable, StateView};

use std::sync::Arc;

use serde::Serialize;

use crate::cards::{Catalog, DeckComposition};
use crate::core::{GameRng, GameState, Outcome, ResourcePool};
use crate::games::{EconomyGame, EconomyGameBuilder, SetupError, Variant};
use crate::rules::{PlayError, PlayRecord, RulesEngine};

/// Result of a `play_card` command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    /// Whether the card was played.
    pub success: bool,
    /// Log message on success, the rejection reason otherwise.
    pub message: String,
    /// State after the command.
    pub state: StateView,
}

/// One running game.
#[derive(Clone, Debug)]
pub struct Session {
    game: EconomyGame,
    state: GameState,
}

impl Session {
    /// Start a session with default configuration.
    ///
    /// Resources the catalog tracks but `initial_resources` omits start at 0.
    pub fn new_game(
        catalog: Arc<Catalog>,
        initial_resources: ResourcePool,
        deck_composition: DeckComposition,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let builder = EconomyGameBuilder::new(catalog)
            .starting_resources(initial_resources)
            .deck(deck_composition);
        Self::from_builder(builder, seed)
    }

    /// Start a session from a configured builder.
    pub fn from_builder(builder: EconomyGameBuilder, seed: u64) -> Result<Self, SetupError> {
        let (game, state) = builder.build(seed)?;
        Ok(Self { game, state })
    }

    /// Start a preset.
    pub fn new_variant(variant: Variant, seed: u64) -> Result<Self, SetupError> {
        Self::from_builder(variant.builder(), seed)
    }

    /// Start a preset with a freshly drawn seed.
    ///
    /// The seed is reported in every `StateView`.
    pub fn new_random(variant: Variant) -> Result<Self, SetupError> {
        let (game, state) = variant.builder().build_with_rng(GameRng::from_entropy())?;
        Ok(Self { game, state })
    }

    /// Read-only projection of the current state.
    #[must_use]
    pub fn state(&self) -> StateView {
        StateView::capture(&self.game, &self.state)
    }

    /// Play the card at a hand position.
    ///
    /// Never panics; a rejected play leaves the session unchanged and is
    /// reported with `success: false`.
    pub fn play_card(&mut self, hand_index: usize) -> PlayReport {
        let (success, message) = match self.try_play(hand_index) {
            Ok(record) => (true, record.message),
            Err(err) => (false, err.to_string()),
        };
        PlayReport {
            success,
            message,
            state: self.state(),
        }
    }

    /// Play a card selected by a signed index, as foreign callers send it.
    ///
    /// Negative or out-of-range values report an invalid selection.
    pub fn play_card_signed(&mut self, hand_index: i64) -> PlayReport {
        self.play_card(usize::try_from(hand_index).unwrap_or(usize::MAX))
    }

    /// Play the card at a hand position, returning the typed result.
    pub fn try_play(&mut self, hand_index: usize) -> Result<PlayRecord, PlayError> {
        self.game.apply_play(&mut self.state, hand_index)
    }

    /// Hand indices that can be played right now.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<usize> {
        self.game.legal_plays(&self.state)
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Current turn number.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn_number
    }

    /// Game name.
    #[must_use]
    pub fn game_name(&self) -> &str {
        self.game.catalog().name()
    }

    /// Rules in use.
    #[must_use]
    pub fn rules(&self) -> &EconomyGame {
        &self.game
    }

    /// Underlying engine state.
    #[must_use]
    pub fn game_state(&self) -> &GameState {
        &self.state
    }
}
