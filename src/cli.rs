//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Player;

/// Strictly Games - console games
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Rock-paper-scissors and tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rock-paper-scissors against the computer
    Rps {
        /// Seed for the computer's choices (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play two-player tic-tac-toe
    #[command(alias = "ttt")]
    Tictactoe {
        /// Mark that moves first in every game (x or o)
        #[arg(long, default_value = "X")]
        first: Player,
    },
}
