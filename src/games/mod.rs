//! Game implementations.
//!
//! - `economy`: the generic card economy rules
//! - `factory_empire`, `grand_engine`: catalog presets played by those rules
//!
//! ## Usage
//!
//! ```
//! use card_economy::games::Variant;
//!
//! let variant: Variant = "grand_engine".parse().unwrap();
//! let (_game, state) = variant.builder().build(42).unwrap();
//! assert_eq!(state.zones.hand().len(), 4);
//! ```

pub mod economy;
pub mod factory_empire;
pub mod grand_engine;

pub use economy::{EconomyGame, EconomyGameBuilder, SetupError};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in game presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    FactoryEmpire,
    GrandEngine,
}

impl Variant {
    /// All presets.
    pub const ALL: [Variant; 2] = [Variant::FactoryEmpire, Variant::GrandEngine];

    /// Identifier accepted by `FromStr`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Variant::FactoryEmpire => "factory_empire",
            Variant::GrandEngine => "grand_engine",
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::FactoryEmpire => factory_empire::NAME,
            Variant::GrandEngine => grand_engine::NAME,
        }
    }

    /// Builder preloaded with the preset's catalog, pool and deck.
    #[must_use]
    pub fn builder(self) -> EconomyGameBuilder {
        match self {
            Variant::FactoryEmpire => factory_empire::builder(),
            Variant::GrandEngine => grand_engine::builder(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised preset name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown game {:?} (expected \"factory_empire\" or \"grand_engine\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
