//! Turn rules and the input seam.
//!
//! - `engine`: the `TurnEngine` state machine
//! - `prompt`: the `Prompter` trait, `GameEvent` messages and a scripted
//!   prompter for tests and automated play

pub mod engine;
pub mod prompt;

pub use engine::{TurnEngine, TurnPhase};
pub use prompt::{GameEvent, Prompter, ScriptedPrompter};
