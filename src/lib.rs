//! # card-economy
//!
//! A single-player card economy game engine.
//!
//! The player holds a hand of action cards drawn from a shuffled deck. Each
//! card trades abstract resources (money, materials, water, ...) or redraws
//! the hand. The game is won when money reaches a threshold and lost when
//! money runs out with nothing left in hand.
//!
//! ## Design Principles
//!
//! 1. **Content as Data**: Cards, resources and banner texts live in a
//!    `Catalog`. Both built-in games run on the same rules.
//!
//! 2. **Check, Then Commit**: A play either applies every debit and credit
//!    or changes nothing. Resource amounts are unsigned and can never go
//!    negative.
//!
//! 3. **Deterministic Sessions**: Every shuffle is driven by a seeded RNG.
//!    The same seed and the same plays reproduce the same game.
//!
//! ## Modules
//!
//! - `core`: RNG, resources, configuration, game log, state
//! - `zones`: Deck, hand and discard piles
//! - `cards`: Card definitions, catalogs, deck compositions
//! - `effects`: Card resolution rules
//! - `rules`: RulesEngine trait, play errors, win/lose evaluation
//! - `games`: The economy rules and the Factory Empire / Grand Engine presets
//! - `session`: The command/query interface and its JSON projection

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, LogEntry, Outcome, ResourceAmount, ResourcePool, TurnPolicy,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{CardDefinition, CardId, Catalog, CatalogError, DeckComposition};

pub use crate::effects::{Effect, EffectResolver, ResolveResult};

pub use crate::rules::{GameResult, PlayError, PlayRecord, RulesEngine};

pub use crate::games::{EconomyGame, EconomyGameBuilder, SetupError, UnknownVariant, Variant};

pub use crate::session::{HandCardView, PlayReport, ResourceTable, Session, StateView};

// Python bindings (optional)
#[cfg(feature = "python")]
pub mod python;
