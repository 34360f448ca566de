//! Single-player card economy.
//!
//! The player holds a hand drawn from a shuffled deck. Each card trades
//! resources (or redraws the hand); the session is won when the scoring
//! resource reaches the victory threshold and lost when it is exhausted
//! with an empty hand.
//!
//! Card content comes entirely from the `Catalog` handed to the builder.

mod game;

pub use game::{EconomyGame, EconomyGameBuilder, SetupError};
