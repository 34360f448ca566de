//! Deck compositions.
//!
//! A `DeckComposition` says how many copies of each card key go into a
//! session's deck. It stays in key form until the game builder resolves it
//! against a `Catalog`.

use serde::{Deserialize, Serialize};

/// Ordered list of `(card key, copies)` pairs.
///
/// ## Example
///
/// ```
/// use card_economy::cards::DeckComposition;
///
/// let deck = DeckComposition::new()
///     .with("buyMaterials", 3)
///     .with("refresh", 2);
///
/// assert_eq!(deck.total(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    entries: Vec<(String, usize)>,
}

impl DeckComposition {
    /// Create an empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies of a card (builder pattern).
    ///
    /// Adding a key twice accumulates the copies.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, count: usize) -> Self {
        self.add(key, count);
        self
    }

    /// Add copies of a card.
    pub fn add(&mut self, key: impl Into<String>, count: usize) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing += count,
            None => self.entries.push((key, count)),
        }
    }

    /// Copies of a given key.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, n)| *n)
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Check if the composition holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for DeckComposition {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut composition = Self::new();
        for (key, count) in iter {
            composition.add(key, count);
        }
        composition
    }
}
