//! The shared timeline.
//!
//! Cards are kept oldest first. Position `0` is the gap before the oldest
//! card and position `len` is the gap after the newest, so a timeline of
//! `len` cards has `len + 1` insertion gaps.
//!
//! Invariant: `timeline[i].date() <= timeline[i + 1].date()` for every
//! adjacent pair. `insert_at` refuses any insertion that would break it.
//!
//! Backed by `im::Vector` so display snapshots are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{EventCard, EventDate};
use crate::core::error::{GameError, Result};

/// Ordered public sequence of placed cards.
///
/// ```
/// use timeline_game::cards::{CardId, EventCard, EventDate};
/// use timeline_game::zones::Timeline;
///
/// let mut timeline = Timeline::seeded(EventCard::new(CardId::new(0), "A", EventDate::new(1800)));
///
/// assert!(timeline.is_valid_placement(0, EventDate::new(1750)));
/// assert!(!timeline.is_valid_placement(0, EventDate::new(1900)));
///
/// timeline.insert_at(0, EventCard::new(CardId::new(1), "B", EventDate::new(1750))).unwrap();
/// assert_eq!(timeline.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    cards: Vector<EventCard>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timeline holding a single seed card.
    #[must_use]
    pub fn seeded(card: EventCard) -> Self {
        let mut cards = Vector::new();
        cards.push_back(card);
        Self { cards }
    }

    /// Highest insertable position. Valid positions are `0..=valid_positions()`.
    #[must_use]
    pub fn valid_positions(&self) -> usize {
        self.cards.len()
    }

    /// Whether a card dated `date` belongs at `position`.
    ///
    /// Ties with either neighbour are accepted.
    #[must_use]
    pub fn is_valid_placement(&self, position: usize, date: EventDate) -> bool {
        let len = self.cards.len();
        if position > len {
            return false;
        }
        let left_ok = position == 0 || self.cards[position - 1].date() <= date;
        let right_ok = position == len || date <= self.cards[position].date();
        left_ok && right_ok
    }

    /// Insert `card` so that it becomes the element at `position`.
    ///
    /// Callers validate with `is_valid_placement` first; an invalid
    /// placement here is a logic error and is rejected.
    pub fn insert_at(&mut self, position: usize, card: EventCard) -> Result<()> {
        let len = self.cards.len();
        if position > len {
            return Err(GameError::IndexOutOfRange { index: position, len });
        }
        if !self.is_valid_placement(position, card.date()) {
            return Err(GameError::InvariantViolation {
                position,
                date: card.date(),
            });
        }
        self.cards.insert(position, card);
        Ok(())
    }

    /// Read-only copy of the timeline for display.
    #[must_use]
    pub fn snapshot(&self) -> Vector<EventCard> {
        self.cards.clone()
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EventCard> {
        self.cards.get(index)
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &EventCard> {
        self.cards.iter()
    }

    /// Number of placed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Only true before setup seeds the timeline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check the ordering invariant over every adjacent pair.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(a, b)| a.date() <= b.date())
    }
}
