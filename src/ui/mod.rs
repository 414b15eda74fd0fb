//! GUI module for the Pentago game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::PentagoApp;
pub use game_state::{GameResult, GameState};
