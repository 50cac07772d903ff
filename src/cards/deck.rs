//! The shared draw pile.
//!
//! Built once from a card table, shuffled once, then only shrinks.
//! The top of the deck is the end of the backing vector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::EventCard;
use super::table::CardTable;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// A finite, consumable sequence of event cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<EventCard>,
}

impl Deck {
    /// Build a deck with one card per table row and shuffle it.
    pub fn build(table: &CardTable, rng: &mut GameRng) -> Self {
        let mut deck = Self::from_cards(table.cards());
        deck.shuffle(rng);
        debug!(cards = deck.len(), seed = rng.seed(), "deck built");
        deck
    }

    /// Create a deck in the given order, without shuffling.
    ///
    /// The last card is the top of the deck.
    #[must_use]
    pub fn from_cards(cards: Vec<EventCard>) -> Self {
        Self { cards }
    }

    /// Uniformly permute the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw_top(&mut self) -> Result<EventCard> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
