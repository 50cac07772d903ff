//! Game configuration.
//!
//! Setup reads these values when building the deck and dealing. Every
//! field has a default, so `GameConfig::default()` plays the standard game.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Cards dealt to each player at the start.
pub const DEFAULT_STARTING_HAND_SIZE: usize = 5;

/// Upper bound imposed by `PlayerId(u8)`.
pub const MAX_PLAYERS: usize = 255;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player before the first turn.
    pub starting_hand_size: usize,

    /// Largest player count the setup prompt accepts (1-255).
    pub max_players: usize,

    /// Deck shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: DEFAULT_STARTING_HAND_SIZE,
            max_players: MAX_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Starting hand must hold at least 1 card");
        self.starting_hand_size = size;
        self
    }

    /// Set the largest accepted player count.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 player");
        assert!(max <= MAX_PLAYERS, "At most 255 players supported");
        self.max_players = max;
        self
    }

    /// Fix the shuffle seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cards needed to deal `player_count` hands.
    #[must_use]
    pub fn cards_needed(&self, player_count: usize) -> usize {
        self.starting_hand_size * player_count
    }

    /// Check that a deck of `deck_size` cards can deal every hand and still
    /// seed the timeline.
    pub fn validate_players(&self, player_count: usize, deck_size: usize) -> Result<()> {
        if player_count == 0 {
            return Err(GameError::NoPlayers);
        }
        if player_count > self.max_players {
            return Err(GameError::TooManyPlayers {
                count: player_count,
                max: self.max_players,
            });
        }
        let needed = self.cards_needed(player_count) + 1;
        if needed > deck_size {
            return Err(GameError::NotEnoughCards {
                needed,
                available: deck_size,
            });
        }
        Ok(())
    }
}
