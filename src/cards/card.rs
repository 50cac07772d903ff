//! Event cards - a displayable name paired with a hidden date.
//!
//! `EventCard` deliberately has no `Display` impl. Callers pick between
//! `name()` (safe to show while the card is in a hand) and `describe()`
//! (name plus date, for the public timeline and reveals).

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
///
/// Assigned from the card table row, so ids are stable for a given table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Chronological key of an event: a year, negative for BCE.
///
/// Totally ordered. Several events may share a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventDate(pub i32);

impl EventDate {
    /// Create a date from a year.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// The raw year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "{} BCE", self.0.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An immutable event card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventCard {
    id: CardId,
    name: String,
    date: EventDate,
}

impl EventCard {
    /// Create a new event card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, date: EventDate) -> Self {
        Self {
            id,
            name: name.into(),
            date,
        }
    }

    /// The card's identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The event name. Never includes the date.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The event date, for ordering comparisons.
    #[must_use]
    pub fn date(&self) -> EventDate {
        self.date
    }

    /// Name and date together, e.g. `"Moon landing", 1969`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("\"{}\", {}", self.name, self.date)
    }
}
