//! Turn engine integration tests.
//!
//! These drive the public API the way the terminal does, with a
//! `ScriptedPrompter` standing in for the players.

use timeline_game::cards::{CardId, Deck, EventCard, EventDate};
use timeline_game::core::{GameState, Player, PlayerId, TurnOutcome};
use timeline_game::rules::{GameEvent, ScriptedPrompter, TurnEngine, TurnPhase};
use timeline_game::zones::Timeline;

fn card(id: u32, name: &str, year: i32) -> EventCard {
    EventCard::new(CardId::new(id), name, EventDate::new(year))
}

fn timeline_names(engine: &TurnEngine) -> Vec<String> {
    engine
        .state()
        .timeline
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

/// Build a state from explicit hands, deck (last = top) and timeline.
fn state_with(hands: Vec<Vec<EventCard>>, deck: Vec<EventCard>, timeline: Vec<EventCard>) -> GameState {
    let mut line = Timeline::new();
    for (i, c) in timeline.into_iter().enumerate() {
        line.insert_at(i, c).unwrap();
    }
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(seat, hand)| {
            let mut player = Player::new(PlayerId::new(seat as u8), format!("P{seat}"));
            for c in hand {
                player.draw_card(c);
            }
            player
        })
        .collect();
    GameState::new(Deck::from_cards(deck), line, players)
}

// =============================================================================
// Placement scenarios
// =============================================================================

/// Timeline [(A,1800)]: (B,1750) at position 0 is accepted.
#[test]
fn test_scenario_place_older_card_first() {
    let state = state_with(
        vec![vec![card(1, "B", 1750), card(2, "X", 2000)], vec![card(3, "Y", 1000)]],
        vec![],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

    let record = engine.play_turn(&mut prompter).unwrap().unwrap();

    assert_eq!(record.outcome, TurnOutcome::Correct);
    assert_eq!(timeline_names(&engine), vec!["B", "A"]);
}

/// Timeline [(A,1800)]: (C,1900) at position 0 is rejected.
#[test]
fn test_scenario_reject_newer_card_first() {
    let state = state_with(
        vec![vec![card(1, "C", 1900), card(2, "X", 2000)], vec![card(3, "Y", 1000)]],
        vec![card(9, "R", 1500)],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

    let record = engine.play_turn(&mut prompter).unwrap().unwrap();

    assert_eq!(record.outcome, TurnOutcome::Incorrect { replaced: true });
    assert_eq!(timeline_names(&engine), vec!["A"]);
    assert!(prompter
        .events
        .iter()
        .any(|e| e.to_string() == "Sorry, the date of \"C\" was actually 1900."));
}

/// Timeline [(A,1800),(B,1900)]: (D,1850) at position 1 is accepted.
#[test]
fn test_scenario_place_between() {
    let state = state_with(
        vec![vec![card(3, "D", 1850), card(4, "X", 2000)], vec![card(5, "Y", 1000)]],
        vec![],
        vec![card(0, "A", 1800), card(1, "B", 1900)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0, 1]);

    engine.play_turn(&mut prompter).unwrap();

    assert_eq!(timeline_names(&engine), vec!["A", "D", "B"]);
}

/// Deck empty, player misplays: discard, no draw, turn still advances.
#[test]
fn test_scenario_misplay_with_empty_deck() {
    let state = state_with(
        vec![vec![card(1, "C", 1900), card(2, "X", 2000)], vec![card(3, "Y", 1000)]],
        vec![],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0, 0]);

    let record = engine.play_turn(&mut prompter).unwrap().unwrap();

    assert_eq!(record.outcome, TurnOutcome::Incorrect { replaced: false });
    assert!(prompter.events.contains(&GameEvent::DeckExhausted));
    assert_eq!(engine.phase(), TurnPhase::AwaitingSelection);
    assert_eq!(engine.state().current_player(), PlayerId::new(1));
    assert_eq!(engine.state().player(PlayerId::new(0)).hand.len(), 1);
    assert!(!engine.is_over());

    // The game carries on normally
    let mut prompter = ScriptedPrompter::new().with_ints([0]);
    let record = engine.play_turn(&mut prompter).unwrap().unwrap();
    assert_eq!(record.player, PlayerId::new(1));
}

// =============================================================================
// Rotation and winning
// =============================================================================

/// Rotation advances once per turn regardless of outcome, and wraps.
#[test]
fn test_rotation_is_round_robin() {
    let state = state_with(
        vec![
            vec![card(1, "A1", 100), card(2, "A2", 200), card(7, "A3", 700)],
            vec![card(3, "B1", 300), card(4, "B2", 400), card(8, "B3", 800)],
            vec![card(5, "C1", 500), card(6, "C2", 600), card(9, "C3", 900)],
        ],
        vec![],
        vec![card(0, "Seed", 0)],
    );
    let mut engine = TurnEngine::new(state);
    // Every player misplays card 0 at position 0 (all dates are after 0)
    let mut prompter = ScriptedPrompter::new().with_ints([0, 0, 0, 0, 0, 0, 0, 0]);

    let mut seats = Vec::new();
    for _ in 0..4 {
        seats.push(engine.state().current_player());
        engine.play_turn(&mut prompter).unwrap();
    }

    assert_eq!(
        seats,
        vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]
    );
    assert_eq!(engine.state().turn_number(), 5);
}

/// Winning stops rotation: the winner stays current and no further turns run.
#[test]
fn test_win_halts_rotation() {
    let state = state_with(
        vec![vec![card(1, "Last", 1900)], vec![card(2, "Y", 1000), card(3, "Z", 1100)]],
        vec![],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([1, 0, 0]);

    let winner = engine.run(&mut prompter).unwrap();

    assert_eq!(winner, PlayerId::new(0));
    assert_eq!(engine.state().current_player(), PlayerId::new(0));
    assert_eq!(engine.state().history().len(), 1);
    // The unused answers were never asked for
    assert_eq!(prompter.remaining_ints(), 2);
    assert_eq!(
        prompter.events.last(),
        Some(&GameEvent::Winner { player: "P0".to_string() })
    );
}

/// A single card is played without a selection prompt.
#[test]
fn test_single_card_autoplay() {
    let state = state_with(
        vec![vec![card(1, "Only", 1750)], vec![card(2, "Y", 1000)]],
        vec![],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0]);

    engine.play_turn(&mut prompter).unwrap();

    assert_eq!(prompter.prompts, vec!["Where would you like to play your card?".to_string()]);
    assert!(!prompter.events.iter().any(|e| matches!(e, GameEvent::Hand { .. })));
}

/// The placement prompt offers exactly `0..=len`.
#[test]
fn test_target_range_matches_timeline() {
    let state = state_with(
        vec![vec![card(3, "D", 2100)], vec![card(4, "Y", 1000)]],
        vec![],
        vec![card(0, "A", 1800), card(1, "B", 1900)],
    );
    let mut engine = TurnEngine::new(state);
    // 3 is past the end and must be re-asked; 2 is the newest end
    let mut prompter = ScriptedPrompter::new().with_ints([3, 2]);

    engine.play_turn(&mut prompter).unwrap();

    assert_eq!(prompter.rejected, 1);
    assert_eq!(timeline_names(&engine), vec!["A", "B", "D"]);
}

/// Cards sharing a date with a timeline neighbour go on either side.
#[test]
fn test_tie_on_either_side() {
    let state = state_with(
        vec![
            vec![card(1, "Same1", 1800), card(2, "X", 3000)],
            vec![card(3, "Same2", 1800), card(4, "Y", 3000)],
        ],
        vec![],
        vec![card(0, "A", 1800)],
    );
    let mut engine = TurnEngine::new(state);
    let mut prompter = ScriptedPrompter::new().with_ints([0, 0, 0, 2]);

    let first = engine.play_turn(&mut prompter).unwrap().unwrap();
    let second = engine.play_turn(&mut prompter).unwrap().unwrap();

    assert_eq!(first.outcome, TurnOutcome::Correct);
    assert_eq!(second.outcome, TurnOutcome::Correct);
    assert_eq!(timeline_names(&engine), vec!["Same1", "A", "Same2"]);
}
