//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How a play modifies state
//! - Win/loss conditions
//!
//! Sessions call into `RulesEngine` but never interpret card effects
//! directly.

pub mod engine;

pub use engine::{GameResult, PlayError, PlayRecord, RulesEngine};
