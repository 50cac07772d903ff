//! Turn resolution engine.
//!
//! Each turn walks a fixed state machine:
//!
//! ```text
//! AwaitingSelection -> AwaitingTarget -> Resolving -> CheckingWin -> Rotating
//!        ^                                                 |            |
//!        |                                                 v            |
//!        |                                         GameOver(winner)     |
//!        +--------------------------------------------------------------+
//! ```
//!
//! The engine owns the `GameState`. Input comes from a `Prompter`, which is
//! trusted to return values in the requested range; the engine only
//! re-checks structural bounds through `Hand` and `Timeline`.

use tracing::{debug, info};

use crate::cards::EventCard;
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, TurnOutcome, TurnRecord};
use crate::rules::prompt::{GameEvent, Prompter};

/// Where the engine is within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The current player picks a card from their hand.
    AwaitingSelection,
    /// The current player picks a timeline position.
    AwaitingTarget {
        /// Hand index of the chosen card.
        selected: usize,
    },
    /// The placement is checked and applied.
    Resolving {
        /// Hand index of the chosen card.
        selected: usize,
        /// Targeted timeline position.
        target: usize,
    },
    /// Hands are scanned for a winner.
    CheckingWin,
    /// The turn passes to the next seat.
    Rotating,
    /// Terminal: no further transitions.
    GameOver {
        /// The player who emptied their hand.
        winner: PlayerId,
    },
}

/// Drives turns over a `GameState` until someone wins.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    phase: TurnPhase,
}

impl TurnEngine {
    /// Start the engine on a dealt and seeded state.
    ///
    /// The first turn belongs to the state's current player. A state that
    /// already has a winner starts in `GameOver`.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        let phase = match state.winner() {
            Some(winner) => TurnPhase::GameOver { winner },
            None => TurnPhase::AwaitingSelection,
        };
        Self { state, phase }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Read access to the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether the engine has reached `GameOver`.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Perform one state transition and return the new phase.
    ///
    /// In `GameOver` this is a no-op.
    pub fn step(&mut self, prompter: &mut dyn Prompter) -> Result<TurnPhase> {
        let next = match self.phase {
            TurnPhase::AwaitingSelection => {
                let player = self.state.player(self.state.current_player());
                let selected = player.select_card(prompter)?;
                if player.hand.len() > 1 {
                    if let Some(card) = player.hand.get(selected) {
                        prompter.notify(&GameEvent::CardChosen {
                            card: card.name().to_string(),
                        });
                    }
                }
                TurnPhase::AwaitingTarget { selected }
            }
            TurnPhase::AwaitingTarget { selected } => {
                prompter.notify(&GameEvent::PlacementOptions {
                    timeline: self.state.timeline.snapshot(),
                });
                let target = prompter.request_int(
                    0,
                    self.state.timeline.valid_positions(),
                    "Where would you like to play your card?",
                )?;
                TurnPhase::Resolving { selected, target }
            }
            TurnPhase::Resolving { selected, target } => {
                self.resolve(selected, target, prompter)?;
                TurnPhase::CheckingWin
            }
            TurnPhase::CheckingWin => match self.state.find_winner() {
                Some(winner) => {
                    self.state.set_winner(winner);
                    let name = self.state.player(winner).name.clone();
                    info!(winner = %name, turns = self.state.turn_number(), "game over");
                    prompter.notify(&GameEvent::Winner { player: name });
                    TurnPhase::GameOver { winner }
                }
                None => TurnPhase::Rotating,
            },
            TurnPhase::Rotating => {
                self.state.advance_turn();
                TurnPhase::AwaitingSelection
            }
            TurnPhase::GameOver { .. } => return Ok(self.phase),
        };
        self.phase = next;
        Ok(next)
    }

    /// Step through one full turn.
    ///
    /// Stops at the next `AwaitingSelection` or at `GameOver`. Returns the
    /// record of the placement resolved during this call, if any.
    pub fn play_turn(&mut self, prompter: &mut dyn Prompter) -> Result<Option<TurnRecord>> {
        let before = self.state.history().len();
        loop {
            match self.step(prompter)? {
                TurnPhase::AwaitingSelection | TurnPhase::GameOver { .. } => break,
                _ => {}
            }
        }
        if self.state.history().len() > before {
            Ok(self.state.history().back().cloned())
        } else {
            Ok(None)
        }
    }

    /// Play turns until someone wins.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<PlayerId> {
        loop {
            if let TurnPhase::GameOver { winner } = self.step(prompter)? {
                return Ok(winner);
            }
        }
    }

    fn resolve(
        &mut self,
        selected: usize,
        target: usize,
        prompter: &mut dyn Prompter,
    ) -> Result<TurnOutcome> {
        let id = self.state.current_player();
        let hand = &self.state.player(id).hand;
        let date = hand
            .get(selected)
            .map(EventCard::date)
            .ok_or(GameError::IndexOutOfRange {
                index: selected,
                len: hand.len(),
            })?;

        let (card, outcome) = if self.state.timeline.is_valid_placement(target, date) {
            let card = self.state.player_mut(id).hand.discard(selected)?;
            debug!(player = %id, card = card.name(), target, "correct placement");
            prompter.notify(&GameEvent::Correct { card: card.clone() });
            self.state.timeline.insert_at(target, card.clone())?;
            prompter.notify(&GameEvent::Timeline {
                timeline: self.state.timeline.snapshot(),
            });
            (card, TurnOutcome::Correct)
        } else {
            let card = self.state.player_mut(id).hand.discard(selected)?;
            self.state.record_discard();
            debug!(player = %id, card = card.name(), target, "wrong placement, card discarded");
            prompter.notify(&GameEvent::Revealed { card: card.clone() });

            let replaced = match self.state.deck.draw_top() {
                Ok(replacement) => {
                    let player = self.state.player_mut(id);
                    prompter.notify(&GameEvent::CardDrawn {
                        player: player.name.clone(),
                        card: replacement.name().to_string(),
                    });
                    player.draw_card(replacement);
                    true
                }
                Err(GameError::EmptyDeck) => {
                    debug!(player = %id, "deck exhausted, no replacement drawn");
                    prompter.notify(&GameEvent::DeckExhausted);
                    false
                }
                Err(err) => return Err(err),
            };
            (card, TurnOutcome::Incorrect { replaced })
        };

        self.state.record_turn(TurnRecord {
            turn: self.state.turn_number(),
            player: id,
            card,
            target,
            outcome,
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Deck, EventDate};
    use crate::core::player::Player;
    use crate::rules::prompt::ScriptedPrompter;
    use crate::zones::Timeline;

    fn card(id: u32, name: &str, year: i32) -> EventCard {
        EventCard::new(CardId::new(id), name, EventDate::new(year))
    }

    /// Two players, timeline `[(A, 1800)]`.
    fn two_player_state(hands: [&[(&str, i32)]; 2], deck: &[(&str, i32)]) -> GameState {
        let mut next_id = 100;
        let mut fresh = |name: &str, year: i32| {
            next_id += 1;
            card(next_id, name, year)
        };
        let deck = Deck::from_cards(deck.iter().map(|&(n, y)| fresh(n, y)).collect());
        let timeline = Timeline::seeded(card(0, "A", 1800));
        let mut players = vec![
            Player::new(PlayerId::new(0), "Ada"),
            Player::new(PlayerId::new(1), "Grace"),
        ];
        for (player, hand) in players.iter_mut().zip(hands) {
            for &(name, year) in hand {
                player.draw_card(fresh(name, year));
            }
        }
        GameState::new(deck, timeline, players)
    }

    #[test]
    fn test_initial_phase() {
        let engine = TurnEngine::new(two_player_state([&[("B", 1750)], &[("C", 1900)]], &[]));
        assert_eq!(engine.phase(), TurnPhase::AwaitingSelection);
        assert_eq!(engine.state().current_player(), PlayerId::new(0));
        assert!(!engine.is_over());
    }

    #[test]
    fn test_phase_sequence_for_one_turn() {
        let state = two_player_state([&[("B", 1750), ("E", 2000)], &[("C", 1900)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

        assert_eq!(engine.step(&mut prompter).unwrap(), TurnPhase::AwaitingTarget { selected: 0 });
        assert_eq!(
            engine.step(&mut prompter).unwrap(),
            TurnPhase::Resolving { selected: 0, target: 0 }
        );
        assert_eq!(engine.step(&mut prompter).unwrap(), TurnPhase::CheckingWin);
        assert_eq!(engine.step(&mut prompter).unwrap(), TurnPhase::Rotating);
        assert_eq!(engine.step(&mut prompter).unwrap(), TurnPhase::AwaitingSelection);
        assert_eq!(engine.state().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_correct_placement_moves_card() {
        let state = two_player_state([&[("B", 1750), ("E", 2000)], &[("C", 1900)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

        let record = engine.play_turn(&mut prompter).unwrap().unwrap();

        assert_eq!(record.outcome, TurnOutcome::Correct);
        assert_eq!(record.card.name(), "B");
        let names: Vec<_> = engine.state().timeline.iter().map(EventCard::name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(engine.state().player(PlayerId::new(0)).hand.len(), 1);
        assert_eq!(prompter.count_events(|e| matches!(e, GameEvent::Correct { .. })), 1);
    }

    #[test]
    fn test_wrong_placement_reveals_and_replaces() {
        let state = two_player_state([&[("C", 1900), ("E", 2000)], &[("F", 1600)]], &[("R", 1500)]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

        let record = engine.play_turn(&mut prompter).unwrap().unwrap();

        assert_eq!(record.outcome, TurnOutcome::Incorrect { replaced: true });
        let state = engine.state();
        assert_eq!(state.timeline.len(), 1);
        assert_eq!(state.discarded(), 1);
        assert!(state.deck.is_empty());
        assert_eq!(state.player(PlayerId::new(0)).hand.names(), vec!["E", "R"]);
        assert!(prompter.events.iter().any(|e| matches!(
            e,
            GameEvent::Revealed { card } if card.name() == "C" && card.date() == EventDate::new(1900)
        )));
        assert_eq!(state.card_count(), state.total_cards());
    }

    #[test]
    fn test_wrong_placement_with_empty_deck_continues() {
        let state = two_player_state([&[("C", 1900), ("E", 2000)], &[("F", 1600)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

        let record = engine.play_turn(&mut prompter).unwrap().unwrap();

        assert_eq!(record.outcome, TurnOutcome::Incorrect { replaced: false });
        assert_eq!(engine.phase(), TurnPhase::AwaitingSelection);
        assert_eq!(engine.state().current_player(), PlayerId::new(1));
        assert_eq!(engine.state().player(PlayerId::new(0)).hand.len(), 1);
        assert_eq!(prompter.count_events(|e| *e == GameEvent::DeckExhausted), 1);
    }

    #[test]
    fn test_last_card_wins() {
        let state = two_player_state([&[("B", 1750)], &[("C", 1900), ("E", 2000)]], &[]);
        let mut engine = TurnEngine::new(state);
        // Single card: no selection prompt, only the target
        let mut prompter = ScriptedPrompter::new().with_ints([0]);

        let winner = engine.run(&mut prompter).unwrap();

        assert_eq!(winner, PlayerId::new(0));
        assert_eq!(engine.winner(), Some(PlayerId::new(0)));
        assert_eq!(engine.state().winner(), Some(PlayerId::new(0)));
        assert_eq!(prompter.prompts.len(), 1);
        assert!(prompter.events.contains(&GameEvent::Winner { player: "Ada".to_string() }));
    }

    #[test]
    fn test_misplaying_last_card_with_empty_deck_wins() {
        let state = two_player_state([&[("C", 1900)], &[("E", 2000)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0]);

        assert_eq!(engine.run(&mut prompter).unwrap(), PlayerId::new(0));
        assert_eq!(engine.state().discarded(), 1);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let state = two_player_state([&[("B", 1750)], &[("C", 1900)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new().with_ints([0]);
        engine.run(&mut prompter).unwrap();

        let turn = engine.state().turn_number();
        let phase = engine.step(&mut prompter).unwrap();

        assert_eq!(phase, TurnPhase::GameOver { winner: PlayerId::new(0) });
        assert_eq!(engine.state().turn_number(), turn);
        assert_eq!(engine.play_turn(&mut prompter).unwrap(), None);
    }

    #[test]
    fn test_closed_input_propagates() {
        let state = two_player_state([&[("B", 1750), ("E", 2000)], &[("C", 1900)]], &[]);
        let mut engine = TurnEngine::new(state);
        let mut prompter = ScriptedPrompter::new();

        let err = engine.step(&mut prompter).unwrap_err();
        assert!(matches!(err, GameError::Prompt(_)));
        assert_eq!(engine.phase(), TurnPhase::AwaitingSelection);
    }
}
