//! Error types for the game engine.
//!
//! Only `EmptyDeck` is expected during normal play, and the turn engine
//! absorbs it. The index and invariant variants mean a caller broke the
//! engine's contract. Setup and card table errors surface before the first
//! turn.

use crate::cards::EventDate;

/// Errors raised by the terminal collaborator.
///
/// Malformed or out-of-range input is retried by the prompter and never
/// produces one of these. They only report that no more input can arrive.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input stream ended (EOF, or a scripted prompter ran dry).
    #[error("input stream closed")]
    Closed,

    /// Reading input or writing a prompt failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The deck has no cards left to draw.
    #[error("no cards left in the deck")]
    EmptyDeck,

    /// A hand or timeline was indexed outside its bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },

    /// A timeline insertion would break chronological order.
    #[error("placing date {date} at position {position} breaks timeline order")]
    InvariantViolation {
        /// The rejected position.
        position: usize,
        /// Date of the card being inserted.
        date: EventDate,
    },

    /// Too many players for the number of cards available.
    #[error("{needed} cards needed but only {available} available")]
    NotEnoughCards {
        /// Cards required for the deal plus the timeline seed.
        needed: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// More players than the configuration allows.
    #[error("{count} players requested but at most {max} allowed")]
    TooManyPlayers {
        /// Requested player count.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// The card table has no entries.
    #[error("card table is empty")]
    EmptyCardTable,

    /// A card table entry has an empty or whitespace-only name.
    #[error("card table row {row} has a blank name")]
    BlankCardName {
        /// Zero-based row in the table.
        row: usize,
    },

    /// Two card table entries share a name.
    #[error("duplicate card in table: {0}")]
    DuplicateCard(String),

    /// The terminal collaborator could not supply input.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;
