//! Grand Engine: a longer production chain from water to crystals.
//!
//! Water boils into steam, steam generates energy, and energy refines ore
//! into crystals, which are the only thing that sells.

use std::sync::{Arc, OnceLock};

use crate::cards::{Catalog, CardDefinition, DeckComposition};
use crate::core::ResourcePool;
use crate::effects::Effect;

use super::economy::EconomyGameBuilder;

/// Display name.
pub const NAME: &str = "Grand Engine";

fn build_catalog() -> Catalog {
    let mut catalog = Catalog::new(NAME)
        .with_resources(["money", "water", "steam", "energy", "ore", "crystals"])
        .with_welcome("Welcome to Grand Engine! Build your economic empire.")
        .with_banners(
            "Victory! You've built a successful economic engine! Final Money: ${score}",
            "Bankruptcy! Your economic engine has failed.",
        );

    catalog.register(
        CardDefinition::new(
            "extractWater",
            "Extract Water",
            Effect::exchange("Extracted 3 water for $10")
                .paying("money", 10)
                .gaining("water", 3),
        )
        .with_cost(10)
        .with_description("Gain 3 water"),
    );
    catalog.register(
        CardDefinition::new(
            "boilWater",
            "Boil Water",
            Effect::exchange("Boiled 2 water into 1 steam")
                .paying("water", 2)
                .gaining("steam", 1),
        )
        .with_description("Convert 2 water to 1 steam"),
    );
    catalog.register(
        CardDefinition::new(
            "generateEnergy",
            "Generate Energy",
            Effect::exchange("Generated 2 energy from 1 steam")
                .paying("steam", 1)
                .gaining("energy", 2),
        )
        .with_description("Convert 1 steam to 2 energy"),
    );
    catalog.register(
        CardDefinition::new(
            "mineOre",
            "Mine Ore",
            Effect::exchange("Mined 2 ore for $15")
                .paying("money", 15)
                .gaining("ore", 2),
        )
        .with_cost(15)
        .with_description("Gain 2 ore"),
    );
    catalog.register(
        CardDefinition::new(
            "refineCrystals",
            "Refine Crystals",
            Effect::exchange("Refined 1 crystal from 1 ore + 1 energy")
                .paying("ore", 1)
                .paying("energy", 1)
                .gaining("crystals", 1),
        )
        .with_description("Convert 1 ore + 1 energy to 1 crystal"),
    );
    catalog.register(
        CardDefinition::new(
            "sellCrystals",
            "Sell Crystals",
            Effect::exchange("Sold 1 crystal for $40")
                .paying("crystals", 1)
                .gaining("money", 40),
        )
        .with_description("Sell 1 crystal for $40"),
    );
    catalog.register(
        CardDefinition::new(
            "activateEngine",
            "Activate Core Engine",
            Effect::redraw_hand("Core engine activated! Redrew hand and gained 1 energy")
                .gaining("energy", 1),
        )
        .with_description("Redraw hand + gain 1 energy"),
    );

    catalog
}

/// Shared catalog, built on first use.
pub fn catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    Arc::clone(CATALOG.get_or_init(|| Arc::new(build_catalog())))
}

/// Opening pool: $100, nothing else.
pub fn starting_resources() -> ResourcePool {
    ResourcePool::from_amounts([
        ("money", 100),
        ("water", 0),
        ("steam", 0),
        ("energy", 0),
        ("ore", 0),
        ("crystals", 0),
    ])
}

/// The 17-card starting deck.
pub fn deck() -> DeckComposition {
    DeckComposition::new()
        .with("extractWater", 3)
        .with("boilWater", 3)
        .with("generateEnergy", 3)
        .with("mineOre", 2)
        .with("refineCrystals", 2)
        .with("sellCrystals", 2)
        .with("activateEngine", 2)
}

/// Builder preloaded with the standard setup.
pub fn builder() -> EconomyGameBuilder {
    EconomyGameBuilder::new(catalog())
        .starting_resources(starting_resources())
        .deck(deck())
}
