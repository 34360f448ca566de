//! Effect system for card plays.
//!
//! - `Effect`: A card's resolution rule as data
//! - `EffectResolver`: Computes the pool a play would produce
//!
//! Every card is one of two rules: a resource exchange, or an exchange that
//! also redraws the hand. Variants differ only in the amounts and resource
//! names they plug in.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{EffectResolver, ResolveResult};
