//! Session interface tests.
//!
//! These tests check what a presentation layer receives:
//! - The JSON projection and its field shapes
//! - Playable flags and the game log
//! - Custom catalogs through `new_game`
//! - Independent sessions

use std::sync::Arc;

use card_economy::cards::{Catalog, CardDefinition, DeckComposition};
use card_economy::core::{Outcome, ResourcePool};
use card_economy::effects::Effect;
use card_economy::games::{factory_empire, SetupError, Variant};
use card_economy::session::Session;

fn lemonade_stand() -> Arc<Catalog> {
    let mut catalog = Catalog::new("Lemonade Stand")
        .with_resources(["money", "lemons", "cups"])
        .with_welcome("Stand open.")
        .with_banners("Sold out! ${score}", "Closed.");
    catalog.register(
        CardDefinition::new(
            "buyLemons",
            "Buy Lemons",
            Effect::exchange("Bought lemons").paying("money", 5).gaining("lemons", 4),
        )
        .with_cost(5),
    );
    catalog.register(CardDefinition::new(
        "squeeze",
        "Squeeze",
        Effect::exchange("Made a cup").paying("lemons", 2).gaining("cups", 1),
    ));
    Arc::new(catalog)
}

/// Test the opening projection of both presets.
#[test]
fn test_opening_views() {
    let factory = Session::new_variant(Variant::FactoryEmpire, 42).unwrap().state();
    assert_eq!(factory.game, "Factory Empire");
    assert_eq!(factory.log, vec!["Welcome to Factory Empire! Manage your resources wisely."]);
    assert_eq!(factory.deck_size + factory.hand.len(), 13);

    let grand = Session::new_variant(Variant::GrandEngine, 42).unwrap().state();
    assert_eq!(grand.game, "Grand Engine");
    let names: Vec<_> = grand.resources.names().collect();
    assert_eq!(names, vec!["money", "water", "steam", "energy", "ore", "crystals"]);
    assert_eq!(grand.deck_size + grand.hand.len(), 17);
}

/// Test the JSON field shapes.
#[test]
fn test_json_projection() {
    let session = Session::new_variant(Variant::GrandEngine, 8).unwrap();
    let json = session.state().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["game"], "Grand Engine");
    assert_eq!(value["seed"], 8);
    assert_eq!(value["turn"], 1);
    assert_eq!(value["outcome"], "in-progress");
    assert_eq!(value["resources"]["money"], 100);
    assert_eq!(value["deck_size"], 13);
    assert_eq!(value["discard_size"], 0);
    assert!(value["banner"].is_null());

    let hand = value["hand"].as_array().unwrap();
    assert_eq!(hand.len(), 4);
    for (i, card) in hand.iter().enumerate() {
        assert_eq!(card["index"], i);
        assert!(card["key"].is_string());
        assert!(card["title"].is_string());
        assert!(card["cost"].is_u64());
        assert!(card["effect"].is_string());
        assert!(card["playable"].is_boolean());
    }
}

/// Test that cards with a price show it and the effect text.
#[test]
fn test_hand_card_details() {
    let session = Session::new_game(
        factory_empire::catalog(),
        ResourcePool::new().with("money", 100),
        DeckComposition::new().with("hireWorker", 4),
        5,
    )
    .unwrap();

    let view = session.state();
    for card in &view.hand {
        assert_eq!(card.key, "hireWorker");
        assert_eq!(card.title, "Hire Worker");
        assert_eq!(card.cost, 50);
        assert_eq!(card.effect, "Gain 1 worker");
        assert!(card.playable);
    }
}

/// Test a custom catalog, including the generated effect text.
#[test]
fn test_custom_catalog() {
    let mut session = Session::new_game(
        lemonade_stand(),
        ResourcePool::new().with("money", 10),
        DeckComposition::new().with("buyLemons", 2).with("squeeze", 2),
        3,
    )
    .unwrap();

    let view = session.state();
    assert_eq!(view.game, "Lemonade Stand");
    assert_eq!(view.log, vec!["Stand open."]);
    assert_eq!(view.resources.get("cups"), Some(0));

    let squeeze = view.hand.iter().find(|c| c.key == "squeeze").unwrap();
    assert_eq!(squeeze.effect, "2 lemons -> 1 cups");
    assert!(!squeeze.playable);

    let buy = view.hand.iter().find(|c| c.key == "buyLemons").unwrap();
    let report = session.play_card(buy.index);
    assert!(report.success);
    assert_eq!(report.state.resources.get("lemons"), Some(4));

    let squeeze = report.state.hand.iter().find(|c| c.key == "squeeze").unwrap();
    assert!(squeeze.playable);
}

/// Test setup validation through `new_game`.
#[test]
fn test_new_game_validation() {
    let err = Session::new_game(
        lemonade_stand(),
        ResourcePool::new().with("sugar", 1),
        DeckComposition::new().with("squeeze", 1),
        0,
    )
    .unwrap_err();
    assert_eq!(err, SetupError::UnknownResource("sugar".to_string()));
    assert_eq!(err.to_string(), "unknown resource \"sugar\" in starting pool");
}

/// Test that rejected plays do not touch the log.
#[test]
fn test_rejected_play_not_logged() {
    let mut session = Session::new_game(
        lemonade_stand(),
        ResourcePool::new(),
        DeckComposition::new().with("squeeze", 4),
        0,
    )
    .unwrap();

    for index in 0..6 {
        let report = session.play_card(index);
        assert!(!report.success);
        assert_eq!(report.state.log.len(), 1);
    }
    assert_eq!(session.outcome(), Outcome::InProgress);
}

/// Test that sessions do not share state.
#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new_game(
        lemonade_stand(),
        ResourcePool::new().with("money", 10),
        DeckComposition::new().with("buyLemons", 4),
        1,
    )
    .unwrap();
    let b = a.clone();

    assert!(a.play_card(0).success);

    assert_eq!(a.state().resources.get("money"), Some(5));
    assert_eq!(b.state().resources.get("money"), Some(10));
    assert_eq!(b.state().log.len(), 1);
}

/// Test that a report carries the state after the command.
#[test]
fn test_report_serializes() {
    let mut session = Session::new_game(
        lemonade_stand(),
        ResourcePool::new().with("money", 10),
        DeckComposition::new().with("buyLemons", 4),
        1,
    )
    .unwrap();

    let report = session.play_card(0);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "Bought lemons");
    assert_eq!(value["state"]["log"][1], "Turn 1: Bought lemons");
    assert_eq!(value["state"]["resources"]["lemons"], 4);
}

/// Test that a catalog loaded from JSON plays the same game as the preset.
#[test]
fn test_catalog_from_json_plays_like_preset() {
    let json = factory_empire::catalog().to_json().unwrap();
    let loaded = Arc::new(Catalog::from_json(&json).unwrap());

    assert_eq!(loaded.name(), "Factory Empire");
    assert_eq!(loaded.len(), factory_empire::catalog().len());

    let mut preset = Session::new_game(
        factory_empire::catalog(),
        factory_empire::starting_resources(),
        factory_empire::deck(),
        11,
    )
    .unwrap();
    let mut custom = Session::new_game(
        loaded,
        factory_empire::starting_resources(),
        factory_empire::deck(),
        11,
    )
    .unwrap();

    assert_eq!(custom.state(), preset.state());
    for index in [0, 1, 0, 3, 2, 0, 1] {
        assert_eq!(custom.play_card(index), preset.play_card(index));
    }
}

/// Test that signed indices from foreign callers never fail hard.
#[test]
fn test_signed_index_is_invalid_selection() {
    let mut session = Session::new_game(
        lemonade_stand(),
        ResourcePool::new().with("money", 10),
        DeckComposition::new().with("buyLemons", 4),
        1,
    )
    .unwrap();

    for index in [-1, i64::MIN, 4, i64::MAX] {
        let report = session.play_card_signed(index);
        assert!(!report.success);
        assert_eq!(report.message, "invalid selection");
        assert_eq!(report.state.log.len(), 1);
    }

    let report = session.play_card_signed(0);
    assert!(report.success);
    assert_eq!(report.state.resources.get("lemons"), Some(4));
}
