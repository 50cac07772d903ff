//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat index supporting 1-255 players, 0-based.
//!
//! ## Player
//!
//! A stable identity plus the player's hand. Players are created during
//! setup and live for the whole game.

use serde::{Deserialize, Serialize};

use crate::cards::EventCard;
use crate::core::error::Result;
use crate::rules::prompt::Prompter;
use crate::zones::Hand;

/// Seat index of a player. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat in round-robin order.
    ///
    /// ```
    /// use timeline_game::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Cards held.
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Add a card to the hand.
    pub fn draw_card(&mut self, card: EventCard) {
        self.hand.draw(card);
    }

    /// Pick the hand index to play this turn.
    pub fn select_card(&self, prompter: &mut dyn Prompter) -> Result<usize> {
        self.hand.select_index(&self.name, prompter)
    }

    /// A player wins by emptying their hand.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
