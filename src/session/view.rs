//! Read-only projection of a session.
//!
//! `StateView` is what a presentation layer sees: plain owned data, in the
//! catalog's resource order, with playability already evaluated. It is
//! rebuilt after every command and never feeds back into the engine.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::{GameState, Outcome};
use crate::games::EconomyGame;
use crate::rules::RulesEngine;
use crate::zones::Zone;

/// Resource amounts in the catalog's declared order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceTable(Vec<(String, u32)>);

impl ResourceTable {
    /// Amount of a resource, if tracked.
    #[must_use]
    pub fn get(&self, resource: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(name, _)| name == resource)
            .map(|&(_, amount)| amount)
    }

    /// Resource names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, amount)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ResourceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, amount) in &self.0 {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}

/// One card in the hand, as displayed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HandCardView {
    /// Position in the hand; the argument to `play_card`.
    pub index: usize,
    pub key: String,
    pub title: String,
    pub cost: u32,
    /// Effect text.
    pub effect: String,
    /// Whether `play_card(index)` would succeed right now.
    pub playable: bool,
}

/// Snapshot of everything a player can see.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StateView {
    /// Game name.
    pub game: String,
    /// Seed that reproduces this session.
    pub seed: u64,
    pub resources: ResourceTable,
    pub hand: Vec<HandCardView>,
    pub turn: u32,
    pub outcome: Outcome,
    /// Rendered log lines, oldest first.
    pub log: Vec<String>,
    pub deck_size: usize,
    pub discard_size: usize,
    /// Victory or defeat text once the session is decided.
    pub banner: Option<String>,
}

impl StateView {
    /// Project a session's state.
    #[must_use]
    pub fn capture(game: &EconomyGame, state: &GameState) -> Self {
        let catalog = game.catalog();
        let accepting = game.accepts_plays(state);

        let resources = ResourceTable(
            catalog
                .resources()
                .iter()
                .map(|name| (name.clone(), state.resources.get(name)))
                .collect(),
        );

        let hand = state
            .zones
            .hand()
            .iter()
            .enumerate()
            .filter_map(|(index, &card)| {
                let def = catalog.get(card)?;
                let effect = if def.description.is_empty() {
                    def.effect.to_string()
                } else {
                    def.description.clone()
                };
                Some(HandCardView {
                    index,
                    key: def.key.clone(),
                    title: def.title.clone(),
                    cost: def.cost,
                    effect,
                    playable: accepting && game.can_play(state, card),
                })
            })
            .collect();

        Self {
            game: catalog.name().to_string(),
            seed: state.seed(),
            resources,
            hand,
            turn: state.turn_number,
            outcome: state.outcome,
            log: state.log_lines(),
            deck_size: state.zones.zone_size(Zone::Deck),
            discard_size: state.zones.zone_size(Zone::Discard),
            banner: game.banner(state),
        }
    }

    /// Hand indices marked playable.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        self.hand.iter().filter(|c| c.playable).map(|c| c.index).collect()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::factory_empire;

    #[test]
    fn test_capture_opening() {
        let (game, state) = factory_empire::builder().build(42).unwrap();
        let view = StateView::capture(&game, &state);

        assert_eq!(view.game, "Factory Empire");
        assert_eq!(view.seed, 42);
        assert_eq!(view.turn, 1);
        assert_eq!(view.outcome, Outcome::InProgress);
        assert_eq!(view.hand.len(), 4);
        assert_eq!(view.deck_size, 9);
        assert_eq!(view.discard_size, 0);
        assert_eq!(view.banner, None);
        assert_eq!(view.resources.get("money"), Some(100));
        assert_eq!(view.resources.get("gold"), None);

        let names: Vec<_> = view.resources.names().collect();
        assert_eq!(names, vec!["money", "materials", "goods", "workers"]);

        for (i, card) in view.hand.iter().enumerate() {
            assert_eq!(card.index, i);
        }
    }

    #[test]
    fn test_playable_matches_legal_plays() {
        let (game, state) = factory_empire::builder().build(3).unwrap();
        let view = StateView::capture(&game, &state);

        assert_eq!(view.playable_indices(), game.legal_plays(&state));
    }

    #[test]
    fn test_resource_order_in_json() {
        let (game, state) = factory_empire::builder().build(1).unwrap();
        let json = StateView::capture(&game, &state).to_json().unwrap();

        let money = json.find("\"money\"").unwrap();
        let materials = json.find("\"materials\"").unwrap();
        let goods = json.find("\"goods\"").unwrap();
        let workers = json.find("\"workers\"").unwrap();
        assert!(money < materials && materials < goods && goods < workers);
    }

    #[test]
    fn test_json_shape() {
        let (game, state) = factory_empire::builder().build(1).unwrap();
        let value = StateView::capture(&game, &state).to_json_value().unwrap();

        assert_eq!(value["game"], "Factory Empire");
        assert_eq!(value["outcome"], "in-progress");
        assert_eq!(value["resources"]["workers"], 2);
        assert!(value["banner"].is_null());
        assert_eq!(value["hand"].as_array().unwrap().len(), 4);
        assert!(value["hand"][0]["playable"].is_boolean());
    }
}
