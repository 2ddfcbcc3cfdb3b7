//! Strictly Games - console CLI
//!
//! Runs one of the games on stdin/stdout. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_games::{Console, interrupt_on_ctrl_c, play_rock_paper_scissors, play_tic_tac_toe};
use strictly_rps::RpsSession;
use strictly_tictactoe::Player;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    // Single-threaded: the only wait is on a line of input.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        match cli.command {
            Command::Rps { seed } => run_rps(seed).await,
            Command::Tictactoe { first } => run_tictactoe(first).await,
        }
    });

    // A blocked stdin read would otherwise hold up runtime shutdown.
    runtime.shutdown_background();
    result
}

/// Run rock-paper-scissors
#[instrument]
async fn run_rps(seed: Option<u64>) -> Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(?seed, "Starting rock-paper-scissors");

    let mut console = Console::stdio(interrupt_on_ctrl_c());
    let mut session = RpsSession::new(rng);
    play_rock_paper_scissors(&mut console, &mut session).await?;

    info!(score = %session.score(), "Rock-paper-scissors finished");
    Ok(())
}

/// Run tic-tac-toe
#[instrument]
async fn run_tictactoe(first: Player) -> Result<()> {
    info!("Starting tic-tac-toe");

    let mut console = Console::stdio(interrupt_on_ctrl_c());
    let finished = play_tic_tac_toe(&mut console, first).await?;

    info!(games = finished.len(), "Tic-tac-toe finished");
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
