//! Core engine types: errors, RNG, configuration, players, state.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_STARTING_HAND_SIZE, MAX_PLAYERS};
pub use error::{GameError, PromptError, Result};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, TurnOutcome, TurnRecord};
