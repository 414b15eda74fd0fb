//! Game rules for Pentago
//!
//! Placement and rotation live on [`Board`](crate::board::Board); this
//! module holds the win condition: five in a row along any row, column or
//! diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_move, winning_line, Line, LINES, WIN_LENGTH};
