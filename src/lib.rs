//! # timeline-game
//!
//! A turn-based chronology card game. Players hold historical event cards
//! whose dates are hidden and take turns inserting them into a shared
//! timeline. A correct placement gets rid of the card; a wrong one reveals
//! the date, discards the card and draws a replacement while the deck
//! lasts. The first player with an empty hand wins.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `GameState` holds the deck, timeline, players
//!    and turn index. The `TurnEngine` owns it; there are no globals.
//!
//! 2. **I/O at the edge**: the engine talks to players only through the
//!    `Prompter` trait. The terminal, tests and scripted games plug in
//!    different implementations.
//!
//! 3. **Reproducible**: deck order comes from a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, configuration, players, game state
//! - `cards`: event cards, the card table, the deck
//! - `zones`: hands and the timeline
//! - `rules`: the turn engine and the prompter seam
//! - `games`: game setup
//! - `terminal`: stdin/stdout prompter

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, Player, PlayerId, PromptError, Result,
    TurnOutcome, TurnRecord,
};

pub use crate::cards::{CardId, CardTable, Deck, EventCard, EventDate};

pub use crate::zones::{Hand, Timeline};

pub use crate::rules::{GameEvent, Prompter, ScriptedPrompter, TurnEngine, TurnPhase};

pub use crate::games::chronology::GameSetup;

pub use crate::terminal::TerminalPrompter;
