//! Tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`GameStatus`]
//! - **Positions**: [`Position`] names the nine squares and converts
//!   to and from zero-based coordinates
//! - **Rules**: pure win/draw checks in [`rules`]
//! - **Game**: [`Game`] validates and applies moves, tracks the turn and
//!   history, and restarts with the same first mover
//! - **Input**: [`parse_move`] and [`parse_play_again`] turn raw text into
//!   typed values
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.make_move(row, col)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod input;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use input::{InputError, InvalidAnswer, PlayAgain, parse_move, parse_play_again};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
