//! Factory Empire: buy materials, turn them into goods, sell the goods.
//!
//! | Card | Cost | Rule | Copies |
//! |------|------|------|--------|
//! | Buy Materials | $20 | $20 -> 3 materials | 3 |
//! | Produce Goods | - | 2 materials -> 1 good | 3 |
//! | Sell Goods | - | 1 good -> $30 | 3 |
//! | Hire Worker | $50 | $50 -> 1 worker | 2 |
//! | Refresh | - | redraw hand | 2 |

use std::sync::{Arc, OnceLock};

use crate::cards::{Catalog, CardDefinition, DeckComposition};
use crate::core::ResourcePool;
use crate::effects::Effect;

use super::economy::EconomyGameBuilder;

/// Display name.
pub const NAME: &str = "Factory Empire";

fn build_catalog() -> Catalog {
    let mut catalog = Catalog::new(NAME)
        .with_resources(["money", "materials", "goods", "workers"])
        .with_welcome("Welcome to Factory Empire! Manage your resources wisely.")
        .with_banners(
            "Victory! You've built a successful factory empire! Final Money: ${score}",
            "Bankruptcy! Your factory empire has failed.",
        );

    catalog.register(
        CardDefinition::new(
            "buyMaterials",
            "Buy Materials",
            Effect::exchange("Bought materials for $20")
                .paying("money", 20)
                .gaining("materials", 3),
        )
        .with_cost(20)
        .with_description("Gain 3 materials"),
    );
    catalog.register(
        CardDefinition::new(
            "produceGoods",
            "Produce Goods",
            Effect::exchange("Produced 1 good from 2 materials")
                .paying("materials", 2)
                .gaining("goods", 1),
        )
        .with_description("Convert 2 materials to 1 good"),
    );
    catalog.register(
        CardDefinition::new(
            "sellGoods",
            "Sell Goods",
            Effect::exchange("Sold 1 good for $30")
                .paying("goods", 1)
                .gaining("money", 30),
        )
        .with_description("Sell 1 good for $30"),
    );
    catalog.register(
        CardDefinition::new(
            "hireWorker",
            "Hire Worker",
            Effect::exchange("Hired a new worker for $50")
                .paying("money", 50)
                .gaining("workers", 1),
        )
        .with_cost(50)
        .with_description("Gain 1 worker"),
    );
    catalog.register(
        CardDefinition::new("refresh", "Refresh", Effect::redraw_hand("Refreshed your hand"))
            .with_description("Redraw your hand"),
    );

    catalog
}

/// Shared catalog, built on first use.
pub fn catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    Arc::clone(CATALOG.get_or_init(|| Arc::new(build_catalog())))
}

/// Opening pool: $100 and two workers.
pub fn starting_resources() -> ResourcePool {
    ResourcePool::new()
        .with("money", 100)
        .with("materials", 0)
        .with("goods", 0)
        .with("workers", 2)
}

/// The 13-card starting deck.
pub fn deck() -> DeckComposition {
    DeckComposition::new()
        .with("buyMaterials", 3)
        .with("produceGoods", 3)
        .with("sellGoods", 3)
        .with("hireWorker", 2)
        .with("refresh", 2)
}

/// Builder preloaded with the standard setup.
pub fn builder() -> EconomyGameBuilder {
    EconomyGameBuilder::new(catalog())
        .starting_resources(starting_resources())
        .deck(deck())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let catalog = catalog();

        assert_eq!(catalog.name(), "Factory Empire");
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.resources(), &["money", "materials", "goods", "workers"]);

        let buy = catalog.by_key("buyMaterials").unwrap();
        assert_eq!(buy.title, "Buy Materials");
        assert_eq!(buy.cost, 20);
        assert_eq!(buy.description, "Gain 3 materials");

        assert!(catalog.by_key("refresh").unwrap().effect.redraws_hand());
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(Arc::ptr_eq(&catalog(), &catalog()));
    }

    #[test]
    fn test_deck_covers_catalog() {
        let catalog = catalog();
        let deck = deck();

        assert_eq!(deck.total(), 13);
        for (key, _) in deck.entries() {
            assert!(catalog.id_of(key).is_some(), "{} missing", key);
        }
    }

    #[test]
    fn test_builder_opening() {
        let (_, state) = builder().build(5).unwrap();

        assert_eq!(state.resources.get("money"), 100);
        assert_eq!(state.resources.get("workers"), 2);
        assert_eq!(state.zones.hand().len(), 4);
        assert_eq!(state.card_count(), 13);
        assert_eq!(
            state.log_lines(),
            vec!["Welcome to Factory Empire! Manage your resources wisely.".to_string()]
        );
    }
}
