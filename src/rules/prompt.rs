//! The terminal collaborator seam.
//!
//! The engine never reads input or prints. It asks a `Prompter` for
//! validated integers and strings and hands it `GameEvent`s to display.
//! Input requests are the engine's only suspension points; a turn waits
//! for as long as the prompter takes.
//!
//! Implementations:
//! - `TerminalPrompter` (in `crate::terminal`): line-based stdin/stdout
//! - `ScriptedPrompter`: replays queued answers and records events, for
//!   tests and automated play

use std::collections::VecDeque;
use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::EventCard;
use crate::core::error::PromptError;

/// Source of player input and sink for game messages.
pub trait Prompter {
    /// Ask for an integer in `[min, max]` inclusive.
    ///
    /// Implementations retry on non-integer or out-of-range input and only
    /// return once they have a value in range. An error means the input
    /// stream is gone.
    fn request_int(&mut self, min: usize, max: usize, prompt: &str) -> Result<usize, PromptError>;

    /// Ask for a line of text.
    fn request_string(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Display a game event. Must not block game logic.
    fn notify(&mut self, event: &GameEvent);
}

/// Something that happened in the game, shown to the players.
///
/// `Display` renders the player-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The deck was built and shuffled.
    DeckShuffled,
    /// The requested player count leaves too few cards.
    TooManyPlayers,
    /// The player count was accepted.
    PlayerCount(usize),
    /// Starting hands are about to be dealt.
    DealingHands,
    /// A player drew a card from the deck.
    CardDrawn {
        /// Player name.
        player: String,
        /// Name of the drawn card.
        card: String,
    },
    /// Every player holds a starting hand.
    HandsDealt,
    /// A player's hand, names only.
    Hand {
        /// Player name.
        player: String,
        /// Card names in hand order.
        cards: Vec<String>,
    },
    /// The card a player picked to play.
    CardChosen {
        /// Card name.
        card: String,
    },
    /// The timeline with its numbered insertion gaps.
    PlacementOptions {
        /// Timeline contents, oldest first.
        timeline: Vector<EventCard>,
    },
    /// The current timeline.
    Timeline {
        /// Timeline contents, oldest first.
        timeline: Vector<EventCard>,
    },
    /// A placement was correct.
    Correct {
        /// The placed card.
        card: EventCard,
    },
    /// A placement was wrong; the true date is now public.
    Revealed {
        /// The misplaced card.
        card: EventCard,
    },
    /// A replacement card was owed but the deck is empty.
    DeckExhausted,
    /// A player emptied their hand.
    Winner {
        /// Player name.
        player: String,
    },
}

fn write_timeline(f: &mut fmt::Formatter<'_>, timeline: &Vector<EventCard>) -> fmt::Result {
    for card in timeline {
        writeln!(f, "{}", card.describe())?;
    }
    Ok(())
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeckShuffled => write!(f, "Shuffling the deck..."),
            Self::TooManyPlayers => write!(f, "Too many players. Please try again."),
            Self::PlayerCount(n) => write!(f, "You have {n} players."),
            Self::DealingHands => write!(f, "Dealing starting hands..."),
            Self::CardDrawn { player, card } => {
                write!(f, "Player {player} has drawn \"{card}\" from the deck.")
            }
            Self::HandsDealt => write!(f, "Starting hands dealt!"),
            Self::Hand { player, cards } => {
                write!(f, "{player}, you are currently holding:")?;
                for (i, card) in cards.iter().enumerate() {
                    write!(f, "\nCard #{i}: \"{card}\"")?;
                }
                Ok(())
            }
            Self::CardChosen { card } => write!(f, "You've chosen to play \"{card}\"."),
            Self::PlacementOptions { timeline } => {
                writeln!(f, "The positions you can currently play a card to are:")?;
                writeln!(f, "#Oldest Events#")?;
                writeln!(f, "-- Position: 0 --")?;
                for (i, card) in timeline.iter().enumerate() {
                    writeln!(f, "{}", card.describe())?;
                    writeln!(f, "-- Position: {} --", i + 1)?;
                }
                write!(f, "#Newest Events#")
            }
            Self::Timeline { timeline } => {
                writeln!(f, "\n###CURRENT TIMELINE###")?;
                writeln!(f, "#Oldest Events#")?;
                write_timeline(f, timeline)?;
                writeln!(f, "#Newest Events#")
            }
            Self::Correct { .. } => write!(f, "Correct!"),
            Self::Revealed { card } => write!(
                f,
                "Sorry, the date of \"{}\" was actually {}.",
                card.name(),
                card.date()
            ),
            Self::DeckExhausted => write!(
                f,
                "There are no cards left! Keep going without drawing a new card!"
            ),
            Self::Winner { player } => write!(f, "Congratulations, {player}, you've won!"),
        }
    }
}

/// Prompter that replays queued answers and records everything it is told.
///
/// Out-of-range integers in the script are skipped, the same way a human
/// would be asked again. Running out of answers yields
/// `PromptError::Closed`.
///
/// ```
/// use timeline_game::rules::{Prompter, ScriptedPrompter};
///
/// let mut prompter = ScriptedPrompter::new().with_ints([9, 2]);
/// // 9 is out of range and skipped
/// assert_eq!(prompter.request_int(0, 3, "pick").unwrap(), 2);
/// assert!(prompter.request_int(0, 3, "pick").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    ints: VecDeque<usize>,
    strings: VecDeque<String>,
    /// Every prompt text requested, in order.
    pub prompts: Vec<String>,
    /// Every event notified, in order.
    pub events: Vec<GameEvent>,
    /// Scripted integers rejected as out of range.
    pub rejected: usize,
}

impl ScriptedPrompter {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer answers.
    #[must_use]
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = usize>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Queue string answers.
    #[must_use]
    pub fn with_strings<S: Into<String>>(mut self, strings: impl IntoIterator<Item = S>) -> Self {
        self.strings.extend(strings.into_iter().map(Into::into));
        self
    }

    /// Queue more integer answers on an existing script.
    pub fn push_ints(&mut self, ints: impl IntoIterator<Item = usize>) {
        self.ints.extend(ints);
    }

    /// Integer answers not yet consumed.
    #[must_use]
    pub fn remaining_ints(&self) -> usize {
        self.ints.len()
    }

    /// Count recorded events matching a predicate.
    pub fn count_events(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Prompter for ScriptedPrompter {
    fn request_int(&mut self, min: usize, max: usize, prompt: &str) -> Result<usize, PromptError> {
        self.prompts.push(prompt.to_string());
        loop {
            let value = self.ints.pop_front().ok_or(PromptError::Closed)?;
            if min <= value && value <= max {
                return Ok(value);
            }
            self.rejected += 1;
        }
    }

    fn request_string(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.strings.pop_front().ok_or(PromptError::Closed)
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
