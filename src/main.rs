//! Terminal entry point: set up a game and play it to the end.
//!
//! Logging goes to stderr and defaults to `warn`; set `RUST_LOG=debug` to
//! trace every placement.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timeline_game::{GameConfig, GameSetup, TerminalPrompter, TurnEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let setup = GameSetup::standard(GameConfig::default()).context("loading card table")?;
    let mut prompter = TerminalPrompter::stdio();

    let state = setup.run(&mut prompter).context("setting up the game")?;
    info!(players = state.player_count(), "game starting");

    let mut engine = TurnEngine::new(state);
    let winner = engine.run(&mut prompter).context("playing the game")?;
    info!(winner = %winner, turns = engine.state().turn_number(), "game finished");

    Ok(())
}
