//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its stable key,
//! display title, monetary cost, effect description and resolution rule.
//! Where a particular copy of the card currently sits is tracked separately by
//! the `ZoneManager`.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Identifier for a card definition.
///
/// Assigned by the `Catalog` at registration, in registration order. Decks,
/// hands and discard piles store these rather than keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the ID as a catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_economy::cards::CardDefinition;
/// use card_economy::effects::Effect;
///
/// let buy = CardDefinition::new(
///     "buyMaterials",
///     "Buy Materials",
///     Effect::exchange("Bought materials for $20")
///         .paying("money", 20)
///         .gaining("materials", 3),
/// )
/// .with_cost(20)
/// .with_description("Gain 3 materials");
///
/// assert_eq!(buy.cost, 20);
/// assert_eq!(buy.key, "buyMaterials");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Identifier, assigned on registration.
    pub id: CardId,

    /// Stable key (e.g. `"sellGoods"`).
    pub key: String,

    /// Display title.
    pub title: String,

    /// Monetary cost shown to the player (may be zero).
    pub cost: u32,

    /// Human-readable effect text.
    pub description: String,

    /// Resolution rule.
    pub effect: Effect,
}

impl CardDefinition {
    /// Create a new card definition with zero cost and no description.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, effect: Effect) -> Self {
        Self {
            id: CardId::new(0),
            key: key.into(),
            title: title.into(),
            cost: 0,
            description: String::new(),
            effect,
        }
    }

    /// Set the displayed cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if the card has no resource requirement.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.effect.costs().is_empty()
    }
}
