//! Error types for the Pentago engine
//!
//! Occupied-cell placement is the only failure the board itself reports, as a
//! `false` return. These errors cover the checked entry points used by front
//! ends: move parsing, range-checked construction and `Game::try_move`.

use thiserror::Error;

use crate::board::Pos;

/// Errors that can occur when turning outside input into moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PentagoError {
    /// Input is not four whitespace-separated integers
    #[error("Invalid format: {0:?} (expected: row col quadrant direction)")]
    InvalidFormat(String),

    /// Row or column outside the board
    #[error("Cell ({row}, {col}) is off the board (rows and columns are 0-5)")]
    CellOutOfRange { row: i32, col: i32 },

    /// Quadrant index outside 0-3
    #[error("Invalid quadrant {0} (quadrants are 0-3)")]
    QuadrantOutOfRange(i32),

    /// Direction code other than 0 or 1
    #[error("Invalid direction {0} (0 for clockwise, 1 for counterclockwise)")]
    InvalidDirection(i32),

    /// Target cell already holds a piece
    #[error("Cell ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),

    /// No legal move exists (board full)
    #[error("No moves available: the board is full")]
    NoMovesAvailable,
}

/// Result type alias for Pentago operations
pub type Result<T> = std::result::Result<T, PentagoError>;
