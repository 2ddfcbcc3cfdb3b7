//! Interactive front ends for the games.

mod rps;
mod tictactoe;

pub use rps::play_rock_paper_scissors;
pub use tictactoe::play_tic_tac_toe;
