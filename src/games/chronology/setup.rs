//! Game setup: deck, players, starting hands and the timeline seed.

use tracing::info;

use crate::cards::{CardTable, Deck};
use crate::core::{GameConfig, GameError, GameRng, GameState, Player, PlayerId, Result};
use crate::rules::prompt::{GameEvent, Prompter};
use crate::zones::Timeline;

/// Builds the initial `GameState` the turn engine starts from.
#[derive(Clone, Debug)]
pub struct GameSetup {
    config: GameConfig,
    table: CardTable,
}

impl GameSetup {
    /// Create a setup from a configuration and a card table.
    #[must_use]
    pub fn new(config: GameConfig, table: CardTable) -> Self {
        Self { config, table }
    }

    /// Create a setup using the built-in card table.
    pub fn standard(config: GameConfig) -> Result<Self> {
        Ok(Self::new(config, CardTable::standard()?))
    }

    /// The card table in use.
    #[must_use]
    pub fn table(&self) -> &CardTable {
        &self.table
    }

    /// Interactive setup: shuffle, ask for the player count and names, deal.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<GameState> {
        let deck = self.shuffled_deck();
        prompter.notify(&GameEvent::DeckShuffled);

        let player_count = self.choose_player_count(deck.len(), prompter)?;
        let names = self.request_names(player_count, prompter)?;

        self.deal(deck, names, &mut |event: GameEvent| prompter.notify(&event))
    }

    /// Non-interactive setup with the given player names.
    pub fn build(&self, names: &[String]) -> Result<GameState> {
        self.config.validate_players(names.len(), self.table.len())?;
        let deck = self.shuffled_deck();
        self.deal(deck, names.to_vec(), &mut |_: GameEvent| {})
    }

    fn shuffled_deck(&self) -> Deck {
        let rng = GameRng::from_seed(self.config.seed);
        info!(seed = rng.seed(), cards = self.table.len(), "shuffling deck");
        Deck::build(&self.table, &mut rng.for_context("deck"))
    }

    /// Ask until the deck can deal every hand and still seed the timeline.
    fn choose_player_count(&self, deck_size: usize, prompter: &mut dyn Prompter) -> Result<usize> {
        // Fail fast if not even one player fits, instead of asking forever
        self.config.validate_players(1, deck_size)?;

        loop {
            let count = prompter.request_int(
                1,
                self.config.max_players,
                "How many players do you have?",
            )?;
            match self.config.validate_players(count, deck_size) {
                Ok(()) => {
                    prompter.notify(&GameEvent::PlayerCount(count));
                    return Ok(count);
                }
                Err(GameError::NotEnoughCards { .. }) => {
                    prompter.notify(&GameEvent::TooManyPlayers);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Names need not be unique; the players so far are listed as a hint.
    fn request_names(&self, count: usize, prompter: &mut dyn Prompter) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::with_capacity(count);
        for seat in 1..=count {
            let name = prompter.request_string(&name_prompt(seat, &names))?;
            names.push(name.trim().to_string());
        }
        Ok(names)
    }

    /// Deal one card per player per round, then seed the timeline.
    fn deal(
        &self,
        mut deck: Deck,
        names: Vec<String>,
        notify: &mut dyn FnMut(GameEvent),
    ) -> Result<GameState> {
        let mut players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(PlayerId::new(seat as u8), name))
            .collect();

        notify(GameEvent::DealingHands);
        for _ in 0..self.config.starting_hand_size {
            for player in &mut players {
                let card = deck.draw_top()?;
                notify(GameEvent::CardDrawn {
                    player: player.name.clone(),
                    card: card.name().to_string(),
                });
                player.draw_card(card);
            }
        }
        notify(GameEvent::HandsDealt);

        let timeline = Timeline::seeded(deck.draw_top()?);
        notify(GameEvent::Timeline {
            timeline: timeline.snapshot(),
        });

        info!(
            players = players.len(),
            deck = deck.len(),
            "starting hands dealt, timeline seeded"
        );
        Ok(GameState::new(deck, timeline, players))
    }
}

/// The name question, followed by the names already taken.
fn name_prompt(seat: usize, taken: &[String]) -> String {
    let mut prompt = format!("What is the name of player {seat}?");
    if !taken.is_empty() {
        prompt.push_str(
            "\nFor your convenience, ensure that player names don't match. \
             The current players are:",
        );
        for name in taken {
            prompt.push('\n');
            prompt.push_str(name);
        }
    }
    prompt
}
