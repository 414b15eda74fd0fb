//! Game state: a board and the color to move

use std::fmt;

use tracing::warn;

use crate::board::{Board, Move, Piece};
use crate::error::{PentagoError, Result};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Piece),
    /// Board full without five in a row
    Draw,
}

/// A game in progress. White moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub turn: Piece,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, White to move
    pub fn new() -> Self {
        Self::with_board(Board::new(), Piece::White)
    }

    /// Resume from an arbitrary position
    pub fn with_board(board: Board, turn: Piece) -> Self {
        Self { board, turn }
    }

    /// Play `mv` for the side to move. Returns `false` and leaves the game
    /// untouched when the target cell is occupied.
    pub fn make_move(&mut self, mv: Move) -> bool {
        if !self.board.apply_move(mv, self.turn) {
            return false;
        }
        self.turn = self.turn.opponent();
        true
    }

    /// Like [`Game::make_move`] but reports why the move was rejected
    pub fn try_move(&mut self, mv: Move) -> Result<()> {
        if self.make_move(mv) {
            Ok(())
        } else {
            warn!(%mv, turn = %self.turn, "rejected move on occupied cell");
            Err(PentagoError::Occupied(mv.pos))
        }
    }

    #[inline]
    pub fn check_winner(&self) -> Piece {
        self.board.check_winner()
    }

    pub fn status(&self) -> GameStatus {
        match self.board.check_winner() {
            Piece::Empty if self.board.is_full() => GameStatus::Draw,
            Piece::Empty => GameStatus::InProgress,
            winner => GameStatus::Won(winner),
        }
    }

    pub fn valid_moves(&self) -> Vec<Move> {
        self.board.valid_moves()
    }

    pub fn random_move(&self) -> Option<Move> {
        self.board.random_move()
    }

    /// Default-depth search for the side to move
    pub fn best_move(&self) -> Option<Move> {
        self.board.best_move(self.turn)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
