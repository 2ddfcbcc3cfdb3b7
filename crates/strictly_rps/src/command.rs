//! Parsing a line of player input into a command.

use crate::Choice;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a round with this choice.
    Play(Choice),
    /// Leave the game.
    Quit,
}

/// Input that is neither a choice nor a quit request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid choice '{}'. Please choose rock, paper, or scissors.", input)]
pub struct InvalidChoice {
    /// The trimmed, lowercased input.
    pub input: String,
}

/// Parses one line of input.
///
/// Surrounding whitespace and letter case are ignored. `quit` and `q` quit.
#[instrument]
pub fn parse_command(raw: &str) -> Result<Command, InvalidChoice> {
    let normalized = raw.trim().to_lowercase();

    if normalized == "quit" || normalized == "q" {
        return Ok(Command::Quit);
    }

    let command = Choice::from_str(&normalized)
        .map(Command::Play)
        .map_err(|_| InvalidChoice { input: normalized })?;
    debug!(?command, "Parsed command");
    Ok(command)
}
