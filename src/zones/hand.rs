//! A player's hand.
//!
//! Cards stay in the order they were drawn. Dates are never exposed through
//! the hand's display path; only names reach the prompter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::EventCard;
use crate::core::error::{GameError, Result};
use crate::rules::prompt::{GameEvent, Prompter};

/// Ordered collection of event cards owned by one player.
///
/// Starting hands fit inline without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[EventCard; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the hand.
    pub fn draw(&mut self, card: EventCard) {
        self.cards.push(card);
    }

    /// Remove and return the card at `index`.
    pub fn discard(&mut self, index: usize) -> Result<EventCard> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Choose which card to play.
    ///
    /// With a single card there is nothing to choose, so index 0 is returned
    /// without prompting. Otherwise the hand is shown to `owner` and a
    /// validated index is requested.
    pub fn select_index(&self, owner: &str, prompter: &mut dyn Prompter) -> Result<usize> {
        match self.cards.len() {
            0 => Err(GameError::IndexOutOfRange { index: 0, len: 0 }),
            1 => Ok(0),
            len => {
                prompter.notify(&GameEvent::Hand {
                    player: owner.to_string(),
                    cards: self.names(),
                });
                let index = prompter.request_int(0, len - 1, "Which card would you like to play?")?;
                Ok(index)
            }
        }
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EventCard> {
        self.cards.get(index)
    }

    /// Card names in hand order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name().to_string()).collect()
    }

    /// Iterate over the cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = &EventCard> {
        self.cards.iter()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// An empty hand means its owner has won.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
