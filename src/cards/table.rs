//! Card table: the static list of events a deck is built from.
//!
//! Tables are validated once at load time. Every entry must have a unique,
//! non-empty name, and the table must not be empty.

use rustc_hash::FxHashSet;

use super::card::{CardId, EventCard, EventDate};
use crate::core::error::{GameError, Result};

/// One row of the card table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    /// Row identifier, also used as the card's id.
    pub id: CardId,
    /// Event name.
    pub name: String,
    /// Event date.
    pub date: EventDate,
}

impl CardRecord {
    /// Create the card for this record.
    #[must_use]
    pub fn to_card(&self) -> EventCard {
        EventCard::new(self.id, self.name.clone(), self.date)
    }
}

/// A validated table of event records.
///
/// ## Example
///
/// ```
/// use timeline_game::cards::CardTable;
///
/// let table = CardTable::from_entries(&[("Moon landing", 1969), ("Fall of Rome", 476)]).unwrap();
/// assert_eq!(table.len(), 2);
///
/// assert!(CardTable::from_entries(&[("A", 1), ("A", 2)]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTable {
    records: Vec<CardRecord>,
}

impl CardTable {
    /// Build and validate a table from `(name, year)` pairs.
    pub fn from_entries(entries: &[(&str, i32)]) -> Result<Self> {
        if entries.is_empty() {
            return Err(GameError::EmptyCardTable);
        }

        let mut seen = FxHashSet::default();
        let mut records = Vec::with_capacity(entries.len());

        for (row, &(name, year)) in entries.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                return Err(GameError::BlankCardName { row });
            }
            if !seen.insert(name) {
                return Err(GameError::DuplicateCard(name.to_string()));
            }
            records.push(CardRecord {
                id: CardId::new(row as u32),
                name: name.to_string(),
                date: EventDate::new(year),
            });
        }

        Ok(Self { records })
    }

    /// The built-in table of historical events.
    pub fn standard() -> Result<Self> {
        Self::from_entries(STANDARD_EVENTS)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.iter()
    }

    /// Create one card per record, in table order.
    #[must_use]
    pub fn cards(&self) -> Vec<EventCard> {
        self.records.iter().map(CardRecord::to_card).collect()
    }
}

/// Built-in events as `(name, year)`; negative years are BCE.
pub const STANDARD_EVENTS: &[(&str, i32)] = &[
    ("Construction of the Great Pyramid of Giza begins", -2560),
    ("Code of Hammurabi is written", -1754),
    ("First ancient Olympic Games", -776),
    ("Founding of Rome", -753),
    ("Battle of Marathon", -490),
    ("Death of Alexander the Great", -323),
    ("Qin Shi Huang unifies China", -221),
    ("Assassination of Julius Caesar", -44),
    ("Eruption of Mount Vesuvius buries Pompeii", 79),
    ("Completion of Hadrian's Wall", 128),
    ("Fall of the Western Roman Empire", 476),
    ("Hagia Sophia is completed", 537),
    ("Charlemagne crowned Holy Roman Emperor", 800),
    ("Norman conquest of England", 1066),
    ("First Crusade captures Jerusalem", 1099),
    ("Signing of the Magna Carta", 1215),
    ("Marco Polo arrives in China", 1275),
    ("Black Death reaches Europe", 1347),
    ("Gutenberg prints his Bible", 1455),
    ("Fall of Constantinople", 1453),
    ("Columbus reaches the Americas", 1492),
    ("Martin Luther posts the Ninety-five Theses", 1517),
    ("Magellan's expedition completes circumnavigation", 1522),
    ("Copernicus publishes his heliocentric model", 1543),
    ("Defeat of the Spanish Armada", 1588),
    ("Founding of Jamestown", 1607),
    ("Galileo observes the moons of Jupiter", 1610),
    ("Newton publishes the Principia", 1687),
    ("Watt patents his improved steam engine", 1769),
    ("United States Declaration of Independence", 1776),
    ("Storming of the Bastille", 1789),
    ("Battle of Waterloo", 1815),
    ("Darwin publishes On the Origin of Species", 1859),
    ("Abolition of slavery in the United States", 1865),
    ("Opening of the Suez Canal", 1869),
    ("Bell patents the telephone", 1876),
    ("Edison demonstrates the incandescent light bulb", 1879),
    ("Completion of the Eiffel Tower", 1889),
    ("Wright brothers' first powered flight", 1903),
    ("Einstein publishes special relativity", 1905),
    ("Sinking of the Titanic", 1912),
    ("Start of the First World War", 1914),
    ("Russian Revolution", 1917),
    ("Discovery of penicillin", 1928),
    ("Wall Street Crash", 1929),
    ("Start of the Second World War", 1939),
    ("End of the Second World War", 1945),
    ("Indian independence", 1947),
    ("Discovery of the structure of DNA", 1953),
    ("Launch of Sputnik 1", 1957),
    ("Yuri Gagarin becomes the first human in space", 1961),
    ("Apollo 11 Moon landing", 1969),
    ("Fall of the Berlin Wall", 1989),
    ("Tim Berners-Lee proposes the World Wide Web", 1989),
    ("Dissolution of the Soviet Union", 1991),
    ("Release of Nelson Mandela", 1990),
    ("Launch of the Euro currency", 1999),
    ("Completion of the Human Genome Project", 2003),
    ("Release of the first iPhone", 2007),
    ("First image of a black hole published", 2019),
];
