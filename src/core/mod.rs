//! Core engine types: RNG, resources, configuration, log, state.
//!
//! This module contains the building blocks every game variant shares.
//! Variants configure these via `GameConfig` and a `Catalog` rather than
//! modifying the core.

pub mod rng;
pub mod resources;
pub mod config;
pub mod log;
pub mod state;

pub use rng::GameRng;
pub use resources::{ResourceAmount, ResourcePool};
pub use config::{GameConfig, TurnPolicy};
pub use log::LogEntry;
pub use state::{GameState, Outcome};
