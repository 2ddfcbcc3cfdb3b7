//! Game engine for tic-tac-toe.

use crate::rules::{check_winner, is_full};
use crate::{Board, GameStatus, Move, MoveError, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe.
///
/// Moves go through [`Game::make_move`] or [`Game::place`], which reject
/// illegal moves without touching the board. The active mark flips after
/// every accepted move that leaves the game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Player whose turn it is.
    #[getter(skip)]
    current_player: Player,
    /// Player who moved first; a restarted game starts with them again.
    #[getter(skip)]
    first_player: Player,
    /// Game status.
    #[getter(skip)]
    status: GameStatus,
    /// Moves played so far, oldest first.
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X moving first.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given first mover.
    #[instrument]
    pub fn starting_with(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            first_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// A move is valid iff both zero-based coordinates are in 0..=2 and the
    /// target square is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Position::from_coords(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Places the current player's mark at zero-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// See [`Game::place`]; additionally [`MoveError::OutOfRange`] for
    /// coordinates off the grid.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos` and returns the new status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    ///
    /// On error the game is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        let played = Move::new(player, pos);
        self.board.set(pos, Square::Occupied(player));
        self.history.push(played);
        debug!(%played, "Move applied");
        self.update_status();

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.status)
    }

    fn update_status(&mut self) {
        if let Some(winner) = self.check_winner() {
            self.status = GameStatus::Won(winner);
        } else if self.is_board_full() {
            self.status = GameStatus::Draw;
        }
    }

    /// Checks if there's a winner.
    pub fn check_winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// Checks if the board is full.
    pub fn is_board_full(&self) -> bool {
        is_full(&self.board)
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns a fresh game with the same first mover.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Game {
        Game::starting_with(self.first_player)
    }

    /// Rebuilds a game by playing `positions` in order.
    ///
    /// # Errors
    ///
    /// The first [`MoveError`] any position produces.
    #[instrument]
    pub fn replay(first_player: Player, positions: &[Position]) -> Result<Game, MoveError> {
        let mut game = Game::starting_with(first_player);
        for &pos in positions {
            game.place(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
