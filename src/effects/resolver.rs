//! Effect resolution - computing what a play does to the resource pool.
//!
//! The resolver is pure: it never mutates state. It either returns the pool
//! the play would produce, or reports that the play cannot be afforded. The
//! rules engine commits the result and handles the hand refresh.

use crate::core::ResourcePool;

use super::Effect;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect can be applied.
    Applied {
        /// Pool after every debit and credit.
        pool: ResourcePool,
        /// Log message for the play.
        message: String,
        /// The hand must be discarded and redrawn.
        redraw_hand: bool,
    },
    /// Some cost cannot be covered; nothing changes.
    Insufficient,
}

impl ResolveResult {
    /// Check if the effect was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ResolveResult::Applied { .. })
    }
}

/// Resolves effects against a resource pool.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve an effect against a pool.
    #[must_use]
    pub fn resolve(effect: &Effect, pool: &ResourcePool) -> ResolveResult {
        match pool.exchange(effect.costs(), effect.gains()) {
            Some(next) => ResolveResult::Applied {
                pool: next,
                message: effect.message().to_string(),
                redraw_hand: effect.redraws_hand(),
            },
            None => ResolveResult::Insufficient,
        }
    }

    /// Check whether an effect could be applied to a pool.
    ///
    /// Agrees with `resolve` by construction.
    #[must_use]
    pub fn can_resolve(effect: &Effect, pool: &ResourcePool) -> bool {
        pool.exchange(effect.costs(), effect.gains()).is_some()
    }
}
