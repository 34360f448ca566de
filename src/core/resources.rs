//! Resource pools.
//!
//! A `ResourcePool` maps resource names (`"money"`, `"materials"`, ...) to
//! unsigned quantities, so no amount can ever go below zero. Pools are only
//! changed through `exchange`, which builds a complete new pool or nothing:
//! either every debit and every credit of a card happens, or none does.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A quantity of one named resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceAmount {
    /// Resource name, as declared by the catalog.
    pub resource: String,
    /// Quantity.
    pub amount: u32,
}

impl ResourceAmount {
    /// Create a new resource amount.
    pub fn new(resource: impl Into<String>, amount: u32) -> Self {
        Self {
            resource: resource.into(),
            amount,
        }
    }
}

impl std::fmt::Display for ResourceAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.resource)
    }
}

/// Mapping from resource name to a non-negative quantity.
///
/// Missing resources read as zero.
///
/// ## Example
///
/// ```
/// use card_economy::core::{ResourceAmount, ResourcePool};
///
/// let pool = ResourcePool::new().with("money", 100);
///
/// let after = pool
///     .exchange(&[ResourceAmount::new("money", 20)], &[ResourceAmount::new("materials", 3)])
///     .unwrap();
/// assert_eq!(after.get("money"), 80);
/// assert_eq!(after.get("materials"), 3);
///
/// // Not enough money: nothing happens
/// assert!(pool.exchange(&[ResourceAmount::new("money", 500)], &[]).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    amounts: FxHashMap<String, u32>,
}

impl ResourcePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from `(name, amount)` pairs.
    pub fn from_amounts<K: Into<String>>(amounts: impl IntoIterator<Item = (K, u32)>) -> Self {
        Self {
            amounts: amounts.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Set a resource (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: impl Into<String>, amount: u32) -> Self {
        self.set(resource, amount);
        self
    }

    /// Get a resource amount, zero if absent.
    #[must_use]
    pub fn get(&self, resource: &str) -> u32 {
        self.amounts.get(resource).copied().unwrap_or(0)
    }

    /// Set a resource amount.
    pub fn set(&mut self, resource: impl Into<String>, amount: u32) {
        self.amounts.insert(resource.into(), amount);
    }

    /// Check whether the pool has an explicit entry for a resource.
    #[must_use]
    pub fn contains(&self, resource: &str) -> bool {
        self.amounts.contains_key(resource)
    }

    /// Check whether every listed cost can be paid in full.
    ///
    /// Repeated entries for the same resource are summed.
    #[must_use]
    pub fn can_afford(&self, costs: &[ResourceAmount]) -> bool {
        self.exchange(costs, &[]).is_some()
    }

    /// Pay `pay` and receive `gain`, returning the resulting pool.
    ///
    /// Returns `None` (and leaves `self` untouched) if any payment cannot be
    /// covered or a gain would overflow.
    #[must_use]
    pub fn exchange(&self, pay: &[ResourceAmount], gain: &[ResourceAmount]) -> Option<ResourcePool> {
        let mut next = self.clone();

        for cost in pay {
            let current = next.get(&cost.resource);
            next.set(cost.resource.clone(), current.checked_sub(cost.amount)?);
        }

        for credit in gain {
            let current = next.get(&credit.resource);
            next.set(credit.resource.clone(), current.checked_add(credit.amount)?);
        }

        Some(next)
    }

    /// Iterate over explicit entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.amounts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Check if the pool has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
