//! Core domain types for rock-paper-scissors.

use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// A hand shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Choice {
    /// Beats scissors.
    #[display("rock")]
    Rock,
    /// Beats rock.
    #[display("paper")]
    Paper,
    /// Beats paper.
    #[display("scissors")]
    Scissors,
}

impl Choice {
    /// All three choices.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Draws a choice uniformly at random.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rng: &mut R) -> Choice {
        Choice::ALL[rng.random_range(0..Choice::ALL.len())]
    }
}

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Human player won.
    #[display("You win!")]
    PlayerWins,
    /// Computer won.
    #[display("Computer wins!")]
    ComputerWins,
    /// Both picked the same shape.
    #[display("It's a tie!")]
    Tie,
}

/// Resolves a round using the fixed beats-relation.
#[instrument]
pub fn determine_winner(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}
