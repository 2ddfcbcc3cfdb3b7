//! Scripted sessions against the tic-tac-toe shell.

use strictly_games::{Console, play_tic_tac_toe};
use strictly_tictactoe::{GameStatus, Player};
use tokio::sync::watch;

async fn run(script: &str, first: Player, interrupted: bool) -> (String, Vec<GameStatus>) {
    run_bytes(script.as_bytes(), first, interrupted).await
}

async fn run_bytes(script: &[u8], first: Player, interrupted: bool) -> (String, Vec<GameStatus>) {
    let (tx, rx) = watch::channel(interrupted);
    let mut console = Console::new(script, Vec::new(), rx);

    let finished = play_tic_tac_toe(&mut console, first)
        .await
        .expect("In-memory console does not fail");
    drop(tx);

    let output = String::from_utf8(console.into_output()).expect("UTF-8 output");
    (output, finished)
}

#[tokio::test]
async fn test_x_wins_top_row() {
    let script = "1 1\n2 1\n1 2\n2 2\n1 3\nno\n";
    let (output, finished) = run(script, Player::X, false).await;

    assert_eq!(finished, vec![GameStatus::Won(Player::X)]);
    assert!(output.contains("=== Tic-Tac-Toe Game ==="));
    assert!(output.contains("1 X | X | X "));
    assert!(output.contains("🎉 Player X wins! Congratulations! 🎉"));
    assert!(output.ends_with("Thanks for playing! Goodbye!\n"));
}

#[tokio::test]
async fn test_invalid_moves_reprompt_same_player() {
    let script = "\
        5 5\n\
        1\n\
        a b\n\
        2 2\n\
        2 2\n\
        1 1\n\
        3 3\n\
        1 2\n\
        3 2\n\
        1 3\n\
        n\n";
    let (output, finished) = run(script, Player::X, false).await;

    assert!(output.contains("Invalid position. Row and column must be between 1 and 3."));
    assert!(output.contains(
        "Invalid input. Please enter row and column separated by space (e.g., '1 2')."
    ));
    assert!(output.contains("Invalid input. Please enter numbers only (e.g., '1 2')."));
    assert!(output.contains("That position is already taken. Please choose an empty position."));

    // Three bad entries, then X takes the center; O's repeat of the center is rejected.
    assert_eq!(output.matches("Player X, enter your move").count(), 6);
    // X: center, bottom-right, bottom-center. O: top-left, top-center, top-right.
    assert_eq!(finished, vec![GameStatus::Won(Player::O)]);
}

#[tokio::test]
async fn test_draw_then_replay_with_same_first_mover() {
    let draw = "1 1\n2 2\n1 3\n1 2\n2 1\n2 3\n3 2\n3 1\n3 3\n";
    let script = format!("{draw}maybe\nyes\n2 2\n");

    let (output, finished) = run(&script, Player::O, false).await;

    assert_eq!(finished, vec![GameStatus::Draw]);
    assert!(output.contains("It's a draw! The board is full with no winner."));
    assert!(output.contains("Please enter 'yes' or 'no'."));
    assert_eq!(output.matches("=== Tic-Tac-Toe Game ===").count(), 2);

    // Second game starts with O again, then input ends mid-game.
    let second = output
        .rsplit("=== Tic-Tac-Toe Game ===")
        .next()
        .expect("Second game output");
    assert!(second.contains("Player O, enter your move"));
    assert!(second.contains("2   | O |   "));
    assert!(output.ends_with("Game interrupted by user.\n"));
}

#[tokio::test]
async fn test_interrupt_during_move() {
    let (output, finished) = run("1 1\n", Player::X, true).await;

    assert!(finished.is_empty());
    assert!(output.ends_with("\n\nGame interrupted by user.\n"));
    assert!(!output.contains("1 X |"));
}

#[tokio::test]
async fn test_end_of_input_at_replay_prompt() {
    let script = "1 1\n2 1\n1 2\n2 2\n1 3\n";
    let (output, finished) = run(script, Player::X, false).await;

    assert_eq!(finished, vec![GameStatus::Won(Player::X)]);
    assert!(output.ends_with("\n\nThanks for playing! Goodbye!\n"));
}

#[tokio::test]
async fn test_invalid_utf8_reprompts() {
    let script = b"1 \xff\n1 1\n2 1\n1 2\n2 2\n1 3\nno\n";
    let (output, finished) = run_bytes(script, Player::X, false).await;

    assert!(output.contains("Invalid input. Please enter numbers only (e.g., '1 2')."));
    assert_eq!(finished, vec![GameStatus::Won(Player::X)]);
    assert!(output.ends_with("Thanks for playing! Goodbye!\n"));
}
