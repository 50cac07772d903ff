//! Game state.
//!
//! `GameState` is the single owner of everything a game mutates:
//! - the deck and the timeline
//! - players and their hands, in seat order
//! - whose turn it is, the turn counter, and the winner once there is one
//! - how many cards have been discarded (they are not kept)
//! - the turn history
//!
//! Card conservation holds at every point between engine steps:
//! `deck + hands + timeline + discarded == total_cards`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::cards::{Deck, EventCard};
use crate::zones::Timeline;

/// How a placement resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The card went into the timeline.
    Correct,
    /// The card was revealed and discarded.
    Incorrect {
        /// Whether a replacement was drawn (false once the deck is empty).
        replaced: bool,
    },
}

/// One resolved turn, for history and replays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// Who played.
    pub player: PlayerId,
    /// The card played.
    pub card: EventCard,
    /// Timeline position targeted.
    pub target: usize,
    /// The result.
    pub outcome: TurnOutcome,
}

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining draw pile.
    pub deck: Deck,

    /// Shared timeline.
    pub timeline: Timeline,

    /// Players in seat order.
    players: Vec<Player>,

    /// Whose turn it is.
    current_player: PlayerId,

    /// Set once a hand is emptied.
    winner: Option<PlayerId>,

    /// Cards removed from play by wrong placements.
    discarded: usize,

    /// Cards in the game at setup.
    total_cards: usize,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Every resolved turn, oldest first.
    history: Vector<TurnRecord>,
}

impl GameState {
    /// Assemble a state from dealt components.
    ///
    /// `total_cards` is taken from the components, so nothing may have been
    /// discarded yet. Player 0 moves first.
    #[must_use]
    pub fn new(deck: Deck, timeline: Timeline, players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        let in_hands: usize = players.iter().map(|p| p.hand.len()).sum();
        let total_cards = deck.len() + timeline.len() + in_hands;

        Self {
            deck,
            timeline,
            players,
            current_player: PlayerId::new(0),
            winner: None,
            discarded: 0,
            total_cards,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.players.len());
        self.turn_number += 1;
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Record the winner. The first winner sticks.
    pub fn set_winner(&mut self, player: PlayerId) {
        self.winner.get_or_insert(player);
    }

    /// First player in seat order whose hand is empty.
    #[must_use]
    pub fn find_winner(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.has_won()).map(|p| p.id)
    }

    /// Count a card as permanently discarded.
    pub fn record_discard(&mut self) {
        self.discarded += 1;
    }

    /// Cards discarded so far.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Cards in the game at setup.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently accounted for across every zone plus the discard count.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        self.deck.len() + in_hands + self.timeline.len() + self.discarded
    }

    /// Append a resolved turn to the history.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }
}
