//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the three piles of a session and implements the
//! draw protocol:
//! - Deck: face-down draw pile, top = end of the vec
//! - Hand: cards available to play, in draw order
//! - Discard: played or replaced cards awaiting a reshuffle
//!
//! Cards are only ever moved between piles, never created or destroyed, so
//! `total_cards()` stays equal to the starting multiset size.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::rng::GameRng;

/// One of the three card piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Draw pile.
    Deck,
    /// Cards available to the player.
    Hand,
    /// Played or replaced cards.
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Zone::Deck => "Deck",
            Zone::Hand => "Hand",
            Zone::Discard => "Discard",
        })
    }
}

/// Manages card locations across deck, hand and discard.
///
/// ## Usage
///
/// ```
/// use card_economy::cards::CardId;
/// use card_economy::core::GameRng;
/// use card_economy::zones::{Zone, ZoneManager};
///
/// let mut rng = GameRng::new(42);
/// let mut zones = ZoneManager::new();
/// zones.initialize_deck((0..6).map(CardId::new).collect(), &mut rng);
///
/// zones.draw_hand(4, &mut rng);
/// assert_eq!(zones.zone_size(Zone::Hand), 4);
/// assert_eq!(zones.zone_size(Zone::Deck), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    /// Draw pile (top = last).
    deck: Vec<CardId>,

    /// Current hand. Inline for the usual 4-card hand.
    hand: SmallVec<[CardId; 4]>,

    /// Discard pile (most recent = last).
    discard: Vec<CardId>,
}

impl ZoneManager {
    /// Create a new manager with all piles empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with an explicit layout.
    ///
    /// `deck` is ordered bottom to top.
    #[must_use]
    pub fn from_piles(deck: Vec<CardId>, hand: &[CardId], discard: Vec<CardId>) -> Self {
        Self {
            deck,
            hand: SmallVec::from_slice(hand),
            discard,
        }
    }

    /// Install `cards` as the deck and shuffle it.
    ///
    /// Hand and discard are emptied.
    pub fn initialize_deck(&mut self, cards: Vec<CardId>, rng: &mut GameRng) {
        self.deck = cards;
        self.hand.clear();
        self.discard.clear();
        self.shuffle_zone(Zone::Deck, rng);
    }

    // === Queries ===

    /// Get the cards in a zone, in order.
    ///
    /// For the deck, index 0 is bottom and the last index is top.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        match zone {
            Zone::Deck => self.deck.as_slice(),
            Zone::Hand => self.hand.as_slice(),
            Zone::Discard => self.discard.as_slice(),
        }
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Get total number of cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Get the top card of the deck.
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.deck.last().copied()
    }

    /// Get the current hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        self.hand.as_slice()
    }

    /// Get the card at a hand position.
    #[must_use]
    pub fn hand_card(&self, index: usize) -> Option<CardId> {
        self.hand.get(index).copied()
    }

    /// Check if nothing is left to draw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.discard.is_empty()
    }

    // === Movement ===

    /// Remove and return the last card of a zone (the top of the deck).
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardId> {
        match zone {
            Zone::Deck => self.deck.pop(),
            Zone::Hand => self.hand.pop(),
            Zone::Discard => self.discard.pop(),
        }
    }

    /// Put a card on top of a zone.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone) {
        match zone {
            Zone::Deck => self.deck.push(card),
            Zone::Hand => self.hand.push(card),
            Zone::Discard => self.discard.push(card),
        }
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        match zone {
            Zone::Deck => rng.shuffle(self.deck.as_mut_slice()),
            Zone::Hand => rng.shuffle(self.hand.as_mut_slice()),
            Zone::Discard => rng.shuffle(self.discard.as_mut_slice()),
        }
    }

    /// Remove the card at a hand position.
    ///
    /// Returns `None` if the index is out of range.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardId> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Move the card at a hand position to the discard pile.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<CardId> {
        let card = self.take_from_hand(index)?;
        self.discard.push(card);
        Some(card)
    }

    /// Move the whole hand to the discard pile.
    ///
    /// Returns the number of cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let moved = self.hand.len();
        self.discard.extend(self.hand.drain(..));
        moved
    }

    /// Move the discard pile into the deck and shuffle the deck.
    ///
    /// Only used once the deck is empty, so the deck becomes a freshly
    /// shuffled copy of what was discarded. Returns the number of cards moved.
    pub fn recycle_discard(&mut self, rng: &mut GameRng) -> usize {
        let moved = self.discard.len();
        self.deck.append(&mut self.discard);
        self.shuffle_zone(Zone::Deck, rng);
        moved
    }

    /// Draw from the top of the deck until the hand holds `hand_size` cards.
    ///
    /// When the deck runs out and the discard pile is not empty, the discard
    /// pile is recycled into the deck first. Stops early once both are empty.
    /// Returns the number of cards drawn.
    pub fn draw_hand(&mut self, hand_size: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;

        while self.hand.len() < hand_size {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.recycle_discard(rng);
            }

            match self.deck.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }

        drawn
    }

    /// Discard the whole hand and draw a new one.
    pub fn refresh_hand(&mut self, hand_size: usize, rng: &mut GameRng) -> usize {
        self.discard_hand();
        self.draw_hand(hand_size, rng)
    }
}
