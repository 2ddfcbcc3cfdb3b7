//! Parsing of typed player input.
//!
//! Total functions from a raw line to a typed value or a descriptive error.
//! Retrying belongs to whoever is prompting.

use crate::Position;
use derive_more::{Display, Error};
use std::num::IntErrorKind;
use tracing::instrument;

/// Why a move entry could not be read as a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not exactly two whitespace-separated fields.
    #[display("Invalid input. Please enter row and column separated by space (e.g., '1 2').")]
    WrongArity,
    /// A field is not an integer.
    #[display("Invalid input. Please enter numbers only (e.g., '1 2').")]
    NotANumber,
    /// A coordinate is outside 1..=3.
    #[display("Invalid position. Row and column must be between 1 and 3.")]
    OutOfRange,
}

/// Parses `"row column"` with one-based coordinates, e.g. `"1 2"` is the
/// top-center square.
#[instrument]
pub fn parse_move(raw: &str) -> Result<Position, InputError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [row, col] = fields.as_slice() else {
        return Err(InputError::WrongArity);
    };

    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Position::from_coords(row, col).ok_or(InputError::OutOfRange)
}

/// One-based text coordinate to a zero-based index.
fn parse_coordinate(field: &str) -> Result<usize, InputError> {
    let value: i64 = field.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange,
        _ => InputError::NotANumber,
    })?;

    match value {
        1..=3 => Ok((value - 1) as usize),
        _ => Err(InputError::OutOfRange),
    }
}

/// Answer to the play-again question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAgain {
    /// Start a fresh game.
    Yes,
    /// Stop playing.
    No,
}

/// Anything other than yes/y/no/n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Please enter 'yes' or 'no'.")]
pub struct InvalidAnswer;

/// Parses a yes/no answer, ignoring case and surrounding whitespace.
#[instrument]
pub fn parse_play_again(raw: &str) -> Result<PlayAgain, InvalidAnswer> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(PlayAgain::Yes),
        "no" | "n" => Ok(PlayAgain::No),
        _ => Err(InvalidAnswer),
    }
}
