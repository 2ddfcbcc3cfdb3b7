//! Interactive two-player tic-tac-toe.

use crate::{Console, ConsoleError};
use strictly_tictactoe::{
    Game, GameStatus, MoveError, PlayAgain, Player, parse_move, parse_play_again,
};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, instrument, warn};

/// Plays games back to back until the players decline a rematch, input
/// ends or Ctrl-C arrives.
///
/// Returns the final status of every finished game.
#[instrument(skip(console))]
pub async fn play_tic_tac_toe<R, W>(
    console: &mut Console<R, W>,
    first_player: Player,
) -> Result<Vec<GameStatus>, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut finished = Vec::new();
    let mut game = Game::starting_with(first_player);

    loop {
        match play_one(console, &mut game).await {
            Ok(status) => finished.push(status),
            Err(ConsoleError::Interrupted | ConsoleError::EndOfInput) => {
                console.say("\n\nGame interrupted by user.").await?;
                return Ok(finished);
            }
            Err(e) => return Err(e),
        }

        match ask_play_again(console).await {
            Ok(PlayAgain::Yes) => game = game.restart(),
            Ok(PlayAgain::No) => {
                console.say("Thanks for playing! Goodbye!").await?;
                return Ok(finished);
            }
            Err(ConsoleError::Interrupted | ConsoleError::EndOfInput) => {
                console.say("\n\nThanks for playing! Goodbye!").await?;
                return Ok(finished);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Runs one game to a win or draw.
async fn play_one<R, W>(console: &mut Console<R, W>, game: &mut Game) -> Result<GameStatus, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say("\n=== Tic-Tac-Toe Game ===").await?;
    console
        .say("Players take turns placing their marks (X and O) on the board.")
        .await?;
    console
        .say("Enter your move as 'row column' (e.g., '1 2' for row 1, column 2).")
        .await?;
    console.say("The first player to get three in a row wins!\n").await?;
    show_board(console, game).await?;

    loop {
        let prompt = format!(
            "Player {}, enter your move (row column): ",
            game.current_player()
        );
        let line = console.ask(&prompt).await?;
        let pos = match parse_move(&line) {
            Ok(pos) => pos,
            Err(e) => {
                console.say(e.to_string()).await?;
                continue;
            }
        };

        let status = match game.place(pos) {
            Ok(status) => status,
            Err(MoveError::SquareOccupied(_)) => {
                console
                    .say("That position is already taken. Please choose an empty position.")
                    .await?;
                continue;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                console.say(e.to_string()).await?;
                continue;
            }
        };
        info!(%pos, ?status, "Move placed");
        show_board(console, game).await?;

        match status {
            GameStatus::Won(winner) => {
                console
                    .say(format!("🎉 Player {winner} wins! Congratulations! 🎉"))
                    .await?;
                return Ok(status);
            }
            GameStatus::Draw => {
                console
                    .say("It's a draw! The board is full with no winner.")
                    .await?;
                return Ok(status);
            }
            GameStatus::InProgress => {}
        }
    }
}

async fn ask_play_again<R, W>(console: &mut Console<R, W>) -> Result<PlayAgain, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let line = console
            .ask("\nWould you like to play again? (yes/no): ")
            .await?;
        match parse_play_again(&line) {
            Ok(answer) => return Ok(answer),
            Err(e) => console.say(e.to_string()).await?,
        }
    }
}

async fn show_board<R, W>(console: &mut Console<R, W>, game: &Game) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say(format!("\n{}\n", game.board())).await
}
