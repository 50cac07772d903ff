//! Card system: event cards, the card table, and the deck.
//!
//! ## Key Types
//!
//! - `EventCard`: a name plus a hidden `EventDate`
//! - `CardTable`: validated static list of events
//! - `Deck`: shuffled draw pile built from a table

pub mod card;
pub mod deck;
pub mod table;

pub use card::{CardId, EventCard, EventDate};
pub use deck::Deck;
pub use table::{CardRecord, CardTable, STANDARD_EVENTS};
