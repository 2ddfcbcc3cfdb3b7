//! Interactive rock-paper-scissors.

use crate::{Console, ConsoleError};
use rand::Rng;
use strictly_rps::{Command, Round, RpsSession, parse_command};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, instrument};

const RULE: &str = "==================================================";
const PROMPT: &str = "\nEnter your choice (rock, paper, scissors) or 'quit' to exit: ";

/// Plays rounds until the player quits, input ends or Ctrl-C arrives.
///
/// Every exit path prints a farewell and returns `Ok`; only console I/O
/// failures are errors.
#[instrument(skip_all)]
pub async fn play_rock_paper_scissors<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut RpsSession<G>,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Rng,
{
    welcome(console).await?;

    match round_loop(console, session).await {
        Ok(()) => {
            console.say(format!("\n{RULE}")).await?;
            console.say("Thanks for playing!").await?;
            console.say(format!("Final Score - {}", session.score())).await?;
            console.say(RULE).await?;
            info!(score = %session.score(), "Player quit");
            Ok(())
        }
        Err(ConsoleError::Interrupted) => console.say("\n\nGame interrupted. Goodbye!").await,
        Err(ConsoleError::EndOfInput) => console.say("\n\nNo input provided. Goodbye!").await,
        Err(e) => Err(e),
    }
}

async fn welcome<R, W>(console: &mut Console<R, W>) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say(RULE).await?;
    console.say("Welcome to Rock Paper Scissors!").await?;
    console.say(RULE).await?;
    console.say("\nRules:").await?;
    console.say("  - Rock beats Scissors").await?;
    console.say("  - Scissors beats Paper").await?;
    console.say("  - Paper beats Rock").await
}

/// Returns `Ok` when the player asks to quit.
async fn round_loop<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut RpsSession<G>,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Rng,
{
    loop {
        let line = console.ask(PROMPT).await?;
        let choice = match parse_command(&line) {
            Ok(Command::Play(choice)) => choice,
            Ok(Command::Quit) => return Ok(()),
            Err(invalid) => {
                console.say(invalid.to_string()).await?;
                continue;
            }
        };

        let round = session.play_round(choice);
        show_round(console, &round).await?;
        console.say(format!("\nScore - {}", session.score())).await?;
    }
}

async fn show_round<R, W>(console: &mut Console<R, W>, round: &Round) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say(format!("\nYou chose: {}", round.player())).await?;
    console.say(format!("Computer chose: {}", round.computer())).await?;
    console.say(round.outcome().to_string()).await
}
