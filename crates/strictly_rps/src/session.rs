//! Score keeping and round resolution.

use crate::{Choice, Outcome, determine_winner};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Running tally of resolved rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Display, Serialize, Deserialize)]
#[display("You: {} | Computer: {} | Ties: {}", wins, losses, ties)]
pub struct Score {
    /// Rounds the player won.
    wins: u32,
    /// Rounds the computer won.
    losses: u32,
    /// Drawn rounds.
    ties: u32,
}

impl Score {
    /// Counts one resolved round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::ComputerWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Number of rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// One resolved exchange of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct Round {
    /// What the player picked.
    player: Choice,
    /// What the computer drew.
    computer: Choice,
    /// Who took the round.
    outcome: Outcome,
}

/// A game against the computer.
///
/// Owns the score and the random source; nothing is global.
#[derive(Debug)]
pub struct RpsSession<G> {
    score: Score,
    rng: G,
}

impl<G: Rng> RpsSession<G> {
    /// Starts a session with an empty score.
    pub fn new(rng: G) -> Self {
        Self {
            score: Score::default(),
            rng,
        }
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Plays one round: draws the computer's choice, resolves and records it.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, player: Choice) -> Round {
        let computer = Choice::random(&mut self.rng);
        let outcome = determine_winner(player, computer);
        self.score.record(outcome);
        info!(%player, %computer, ?outcome, score = %self.score, "Round resolved");
        Round::new(player, computer, outcome)
    }
}
