//! Economy game implementation.

use std::sync::Arc;

use crate::cards::{Catalog, CardId, DeckComposition};
use crate::core::{GameConfig, GameRng, GameState, Outcome, ResourcePool, TurnPolicy};
use crate::effects::{EffectResolver, ResolveResult};
use crate::rules::{PlayError, PlayRecord, RulesEngine};

/// Why a session could not be set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Deck composition names a key the catalog does not define.
    UnknownCard(String),
    /// Starting pool names a resource the catalog does not declare.
    UnknownResource(String),
    /// The configured scoring resource is not declared by the catalog.
    UnknownScoringResource(String),
    /// `hand_size` is zero.
    ZeroHandSize,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::UnknownCard(key) => write!(f, "unknown card {:?} in deck composition", key),
            SetupError::UnknownResource(name) => write!(f, "unknown resource {:?} in starting pool", name),
            SetupError::UnknownScoringResource(name) => write!(f, "scoring resource {:?} is not tracked", name),
            SetupError::ZeroHandSize => f.write_str("hand size must be at least 1"),
        }
    }
}

impl std::error::Error for SetupError {}

/// A card economy: one catalog, one configuration.
///
/// Holds no session data; the `GameState` it plays against is passed in.
#[derive(Clone, Debug)]
pub struct EconomyGame {
    config: GameConfig,
    catalog: Arc<Catalog>,
}

/// Builder for creating an EconomyGame and its opening state.
///
/// ## Example
///
/// ```
/// use card_economy::cards::DeckComposition;
/// use card_economy::games::{factory_empire, EconomyGameBuilder};
/// use card_economy::rules::RulesEngine;
///
/// let (game, state) = EconomyGameBuilder::new(factory_empire::catalog())
///     .resource("money", 280)
///     .resource("goods", 1)
///     .deck(DeckComposition::new().with("sellGoods", 4))
///     .build(7)
///     .unwrap();
///
/// assert_eq!(state.zones.hand().len(), 4);
/// assert_eq!(state.resources.get("materials"), 0);
/// assert_eq!(game.catalog().name(), "Factory Empire");
/// ```
#[derive(Clone, Debug)]
pub struct EconomyGameBuilder {
    catalog: Arc<Catalog>,
    starting: ResourcePool,
    composition: DeckComposition,
    config: GameConfig,
}

impl EconomyGameBuilder {
    /// Start a builder for a catalog, with an empty pool and deck.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            starting: ResourcePool::new(),
            composition: DeckComposition::new(),
            config: GameConfig::default(),
        }
    }

    /// Replace the starting pool.
    pub fn starting_resources(mut self, pool: ResourcePool) -> Self {
        self.starting = pool;
        self
    }

    /// Set one starting amount.
    pub fn resource(mut self, resource: impl Into<String>, amount: u32) -> Self {
        self.starting.set(resource, amount);
        self
    }

    /// Replace the deck composition.
    pub fn deck(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of cards in a full hand.
    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    /// Set the score that wins the game.
    pub fn victory_threshold(mut self, threshold: u32) -> Self {
        self.config.victory_threshold = threshold;
        self
    }

    /// Set when the turn counter advances.
    pub fn turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.config.turn_policy = policy;
        self
    }

    /// Whether plays are rejected once the outcome is decided.
    pub fn lock_on_outcome(mut self, lock: bool) -> Self {
        self.config.lock_on_outcome = lock;
        self
    }

    /// Build the game and initial state from a seed.
    pub fn build(self, seed: u64) -> Result<(EconomyGame, GameState), SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game and initial state driven by an existing RNG.
    pub fn build_with_rng(self, rng: GameRng) -> Result<(EconomyGame, GameState), SetupError> {
        let catalog = self.catalog;
        let config = self.config;

        if config.hand_size == 0 {
            return Err(SetupError::ZeroHandSize);
        }
        if !catalog.has_resource(&config.scoring_resource) {
            return Err(SetupError::UnknownScoringResource(config.scoring_resource));
        }
        if let Some((name, _)) = self.starting.iter().find(|(name, _)| !catalog.has_resource(name)) {
            return Err(SetupError::UnknownResource(name.to_string()));
        }

        // Every tracked resource gets an explicit entry, zero if unspecified
        let mut pool = ResourcePool::new();
        for resource in catalog.resources() {
            pool.set(resource.clone(), self.starting.get(resource));
        }

        let mut cards = Vec::with_capacity(self.composition.total());
        for (key, count) in self.composition.entries() {
            let id = catalog
                .id_of(key)
                .ok_or_else(|| SetupError::UnknownCard(key.clone()))?;
            cards.extend(std::iter::repeat(id).take(*count));
        }

        let mut state = GameState::with_rng(pool, rng);
        state.install_deck(cards);
        state.draw_hand(config.hand_size);
        if let Some(welcome) = catalog.welcome() {
            state.record_notice(welcome);
        }

        Ok((EconomyGame { config, catalog }, state))
    }
}

impl EconomyGame {
    /// Current amount of the scoring resource.
    pub fn score(&self, state: &GameState) -> u32 {
        state.resources.get(&self.config.scoring_resource)
    }

    /// Banner text for a decided session.
    ///
    /// `{score}` in the catalog's victory text is replaced by the final
    /// amount of the scoring resource.
    pub fn banner(&self, state: &GameState) -> Option<String> {
        match state.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some(
                self.catalog
                    .victory_text()
                    .replace("{score}", &self.score(state).to_string()),
            ),
            Outcome::Lost => Some(self.catalog.defeat_text().to_string()),
        }
    }

    fn advances_turn(&self, redrew_hand: bool) -> bool {
        match self.config.turn_policy {
            TurnPolicy::Fixed => false,
            TurnPolicy::PerPlay => true,
            TurnPolicy::PerRedraw => redrew_hand,
        }
    }
}

impl RulesEngine for EconomyGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn apply_play(&self, state: &mut GameState, hand_index: usize) -> Result<PlayRecord, PlayError> {
        if !self.accepts_plays(state) {
            return Err(PlayError::GameOver);
        }

        let card: CardId = state
            .zones
            .hand_card(hand_index)
            .ok_or(PlayError::InvalidSelection)?;
        let definition = self.catalog.get(card).ok_or(PlayError::InvalidSelection)?;

        let (pool, message, redraw_hand) = match EffectResolver::resolve(&definition.effect, &state.resources) {
            ResolveResult::Applied {
                pool,
                message,
                redraw_hand,
            } => (pool, message, redraw_hand),
            ResolveResult::Insufficient => return Err(PlayError::InsufficientResources),
        };

        // Commit: nothing below can fail
        state.resources = pool;
        state.zones.discard_from_hand(hand_index);
        if redraw_hand {
            state.refresh_hand(self.config.hand_size);
        }
        state.record_play(card, message.clone());

        if self.advances_turn(redraw_hand) {
            state.advance_turn();
        }

        let outcome = self.check_game_end(state);

        Ok(PlayRecord {
            card,
            message,
            redrew_hand: redraw_hand,
            outcome,
        })
    }
}
