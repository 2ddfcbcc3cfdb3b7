//! Strictly Games library - console front ends for the game crates
//!
//! # Architecture
//!
//! - **Console**: async prompt/answer over any reader and writer, with
//!   Ctrl-C surfacing as an error instead of killing the process
//! - **Shells**: interactive loops for rock-paper-scissors and tic-tac-toe;
//!   all game rules live in `strictly_rps` and `strictly_tictactoe`
//!
//! # Example
//!
//! ```no_run
//! use strictly_games::{Console, interrupt_on_ctrl_c, play_tic_tac_toe};
//! use strictly_tictactoe::Player;
//!
//! # async fn example() -> Result<(), strictly_games::ConsoleError> {
//! let mut console = Console::stdio(interrupt_on_ctrl_c());
//! let results = play_tic_tac_toe(&mut console, Player::X).await?;
//! println!("{} games finished", results.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod shell;

pub use console::{Console, ConsoleError, interrupt_on_ctrl_c};
pub use shell::{play_rock_paper_scissors, play_tic_tac_toe};
