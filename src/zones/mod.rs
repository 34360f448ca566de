//! Zone system for card locations.
//!
//! A session has three piles: deck, hand and discard. The `ZoneManager`
//! moves cards between them and implements the draw / reshuffle protocol.
//!
//! ## Key Types
//!
//! - `Zone`: Pile identifier
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{Zone, ZoneManager};
