//! The chronology game.
//!
//! - A shuffled deck is built from the card table
//! - Each player is dealt a starting hand (5 cards by default)
//! - One more card seeds the timeline
//! - On your turn: place a card; a wrong guess reveals the date, discards
//!   the card and draws a replacement while the deck lasts
//! - First player to empty their hand wins
//!
//! Supports any player count the deck can deal.

mod setup;

pub use setup::GameSetup;
