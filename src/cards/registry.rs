//! Card catalog for definition lookup.
//!
//! A `Catalog` is everything a game variant declares as data: its name and
//! banner texts, the ordered list of resources it tracks, and its card
//! definitions. Lookup is by `CardId` (a dense index) or by card key.
//!
//! A catalog serializes to plain data. Deserializing re-registers every card,
//! so the key index is rebuilt and the same checks as `register` apply.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// Catalog of card definitions for one game variant.
///
/// ## Example
///
/// ```
/// use card_economy::cards::{Catalog, CardDefinition};
/// use card_economy::effects::Effect;
///
/// let mut catalog = Catalog::new("Tiny Market").with_resources(["money", "goods"]);
///
/// let sell = catalog.register(CardDefinition::new(
///     "sellGoods",
///     "Sell Goods",
///     Effect::exchange("Sold 1 good for $30")
///         .paying("goods", 1)
///         .gaining("money", 30),
/// ));
///
/// assert_eq!(catalog.id_of("sellGoods"), Some(sell));
/// assert_eq!(catalog.get(sell).unwrap().title, "Sell Goods");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    name: String,
    welcome: Option<String>,
    victory_text: String,
    defeat_text: String,
    resources: Vec<String>,
    cards: Vec<CardDefinition>,
    #[serde(skip)]
    by_key: FxHashMap<String, CardId>,
}

/// A catalog declaration that was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateResource(String),
    DuplicateCard(String),
    UndeclaredResource { card: String, resource: String },
    Full,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateResource(resource) => {
                write!(f, "Resource {:?} already declared", resource)
            }
            Self::DuplicateCard(key) => write!(f, "Card with key {:?} already registered", key),
            Self::UndeclaredResource { card, resource } => {
                write!(f, "Card {:?} uses undeclared resource {:?}", card, resource)
            }
            Self::Full => write!(f, "Catalog is full"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Serialized form of a catalog, before validation.
#[derive(Deserialize)]
struct CatalogData {
    name: String,
    #[serde(default)]
    welcome: Option<String>,
    #[serde(default)]
    victory_text: String,
    #[serde(default)]
    defeat_text: String,
    resources: Vec<String>,
    cards: Vec<CardDefinition>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new(data.name).with_banners(data.victory_text, data.defeat_text);
        catalog.welcome = data.welcome;
        for resource in data.resources {
            catalog.try_declare_resource(resource)?;
        }
        for card in data.cards {
            catalog.try_register(card)?;
        }
        Ok(catalog)
    }
}

impl Catalog {
    /// Create an empty catalog for a named game.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare the tracked resources, in display order (builder pattern).
    ///
    /// Panics if a resource name is declared twice.
    #[must_use]
    pub fn with_resources<S: Into<String>>(mut self, resources: impl IntoIterator<Item = S>) -> Self {
        for resource in resources {
            self.declare_resource(resource);
        }
        self
    }

    /// Set the line logged when a session starts (builder pattern).
    #[must_use]
    pub fn with_welcome(mut self, text: impl Into<String>) -> Self {
        self.welcome = Some(text.into());
        self
    }

    /// Set the victory and defeat banners (builder pattern).
    #[must_use]
    pub fn with_banners(mut self, victory: impl Into<String>, defeat: impl Into<String>) -> Self {
        self.victory_text = victory.into();
        self.defeat_text = defeat.into();
        self
    }

    /// Declare one tracked resource.
    ///
    /// Panics if the resource is already declared.
    pub fn declare_resource(&mut self, resource: impl Into<String>) {
        if let Err(err) = self.try_declare_resource(resource) {
            panic!("{}", err);
        }
    }

    /// Declare one tracked resource, rejecting duplicates.
    pub fn try_declare_resource(&mut self, resource: impl Into<String>) -> Result<(), CatalogError> {
        let resource = resource.into();
        if self.has_resource(&resource) {
            return Err(CatalogError::DuplicateResource(resource));
        }
        self.resources.push(resource);
        Ok(())
    }

    /// Register a card definition and return its assigned ID.
    ///
    /// Panics if a card with the same key already exists, or if the card's
    /// effect mentions a resource the catalog does not declare.
    pub fn register(&mut self, card: CardDefinition) -> CardId {
        match self.try_register(card) {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Register a card definition, returning an error instead of panicking.
    ///
    /// The card's `id` is overwritten with the next dense ID.
    pub fn try_register(&mut self, mut card: CardDefinition) -> Result<CardId, CatalogError> {
        if self.by_key.contains_key(&card.key) {
            return Err(CatalogError::DuplicateCard(card.key));
        }
        for amount in card.effect.costs().iter().chain(card.effect.gains()) {
            if !self.has_resource(&amount.resource) {
                return Err(CatalogError::UndeclaredResource {
                    card: card.key.clone(),
                    resource: amount.resource.clone(),
                });
            }
        }

        let raw = u16::try_from(self.cards.len()).map_err(|_| CatalogError::Full)?;
        let id = CardId::new(raw);
        card.id = id;
        self.by_key.insert(card.key.clone(), id);
        self.cards.push(card);
        Ok(id)
    }

    /// Load a catalog from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the catalog as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&CardDefinition> {
        self.id_of(key).and_then(|id| self.get(id))
    }

    /// Resolve a card key to its ID.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<CardId> {
        self.by_key.get(key).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    /// Tracked resources, in display order.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Check if a resource is declared.
    #[must_use]
    pub fn has_resource(&self, resource: &str) -> bool {
        self.resources.iter().any(|r| r == resource)
    }

    /// Game name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Session start line, if any.
    #[must_use]
    pub fn welcome(&self) -> Option<&str> {
        self.welcome.as_deref()
    }

    /// Victory banner.
    #[must_use]
    pub fn victory_text(&self) -> &str {
        &self.victory_text
    }

    /// Defeat banner.
    #[must_use]
    pub fn defeat_text(&self) -> &str {
        &self.defeat_text
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    fn market() -> Catalog {
        Catalog::new("Market")
            .with_resources(["money", "goods"])
            .with_welcome("Welcome!")
            .with_banners("You win", "You lose")
    }

    fn sell() -> CardDefinition {
        CardDefinition::new(
            "sellGoods",
            "Sell Goods",
            Effect::exchange("Sold 1 good for $30")
                .paying("goods", 1)
                .gaining("money", 30),
        )
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = market();
        let id = catalog.register(sell());

        assert_eq!(id, CardId::new(0));
        assert_eq!(catalog.get(id).unwrap().key, "sellGoods");
        assert_eq!(catalog.get(id).unwrap().id, id);
        assert!(catalog.get(CardId::new(9)).is_none());
        assert!(catalog.contains(id));
        assert!(!catalog.contains(CardId::new(9)));
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut catalog = market();
        let a = catalog.register(sell());
        let b = catalog.register(CardDefinition::new("refresh", "Refresh", Effect::redraw_hand("Refreshed")));

        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));
        assert_eq!(catalog.len(), 2);

        let keys: Vec<_> = catalog.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["sellGoods", "refresh"]);
    }

    #[test]
    fn test_lookup_by_key() {
        let mut catalog = market();
        let id = catalog.register(sell());

        assert_eq!(catalog.id_of("sellGoods"), Some(id));
        assert_eq!(catalog.by_key("sellGoods").unwrap().title, "Sell Goods");
        assert!(catalog.id_of("mystery").is_none());
    }

    #[test]
    fn test_metadata() {
        let catalog = market();

        assert_eq!(catalog.name(), "Market");
        assert_eq!(catalog.welcome(), Some("Welcome!"));
        assert_eq!(catalog.victory_text(), "You win");
        assert_eq!(catalog.defeat_text(), "You lose");
        assert_eq!(catalog.resources(), &["money".to_string(), "goods".to_string()]);
        assert!(catalog.has_resource("goods"));
        assert!(!catalog.has_resource("ore"));
        assert!(catalog.is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_key_panics() {
        let mut catalog = market();
        catalog.register(sell());
        catalog.register(sell()); // Should panic
    }

    #[test]
    #[should_panic(expected = "undeclared resource")]
    fn test_undeclared_resource_panics() {
        let mut catalog = Catalog::new("Market").with_resources(["money"]);
        catalog.register(sell()); // goods is not declared
    }

    #[test]
    #[should_panic(expected = "already declared")]
    fn test_duplicate_resource_panics() {
        let _ = Catalog::new("Market").with_resources(["money", "money"]);
    }

    #[test]
    fn test_try_register_errors() {
        let mut catalog = market();
        catalog.try_register(sell()).unwrap();

        assert_eq!(
            catalog.try_register(sell()),
            Err(CatalogError::DuplicateCard("sellGoods".to_string()))
        );
        assert_eq!(
            catalog.try_declare_resource("goods"),
            Err(CatalogError::DuplicateResource("goods".to_string()))
        );

        let mut bare = Catalog::new("Market").with_resources(["money"]);
        let err = bare.try_register(sell()).unwrap_err();
        assert_eq!(err.to_string(), "Card \"sellGoods\" uses undeclared resource \"goods\"");
        assert!(bare.is_empty());
    }

    #[test]
    fn test_json_round_trip_rebuilds_index() {
        let mut catalog = market();
        catalog.register(sell());
        catalog.register(CardDefinition::new("refresh", "Refresh", Effect::redraw_hand("Refreshed")));

        let loaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();

        assert_eq!(loaded.name(), "Market");
        assert_eq!(loaded.welcome(), Some("Welcome!"));
        assert_eq!(loaded.victory_text(), "You win");
        assert_eq!(loaded.resources(), catalog.resources());
        assert_eq!(loaded.id_of("refresh"), Some(CardId::new(1)));
        assert_eq!(loaded.by_key("sellGoods"), catalog.by_key("sellGoods"));
    }

    #[test]
    fn test_json_rejects_undeclared_resource() {
        let json = r#"{
            "name": "Broken",
            "resources": ["money"],
            "cards": [{
                "id": 0,
                "key": "sellGoods",
                "title": "Sell Goods",
                "cost": 0,
                "description": "",
                "effect": {
                    "kind": "exchange",
                    "pay": [{"resource": "goods", "amount": 1}],
                    "gain": [{"resource": "money", "amount": 30}],
                    "message": "Sold"
                }
            }]
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("undeclared resource"));
    }

    #[test]
    fn test_json_rejects_duplicate_card() {
        let mut catalog = market();
        catalog.register(sell());
        let mut value = serde_json::to_value(&catalog).unwrap();
        let card = value["cards"][0].clone();
        value["cards"].as_array_mut().unwrap().push(card);

        let err = serde_json::from_value::<Catalog>(value).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }
}
