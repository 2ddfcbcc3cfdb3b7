//! Rock-paper-scissors game logic.
//!
//! Pure types and rules with no I/O: the beats-relation, input parsing and a
//! session that keeps score. Interactive shells live in the binary crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod session;
mod types;

pub use command::{Command, InvalidChoice, parse_command};
pub use session::{Round, RpsSession, Score};
pub use types::{Choice, Outcome, determine_winner};
