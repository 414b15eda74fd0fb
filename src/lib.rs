//! Pentago engine
//!
//! Pentago is played on a 6x6 board split into four 3x3 quadrants:
//! - A move places a piece on an empty cell, then rotates one quadrant a
//!   quarter turn clockwise or counter-clockwise
//! - Five in a row (row, column or diagonal) wins
//! - White moves first
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, rotation and move generation
//! - [`rules`]: Win detection
//! - [`eval`]: Future-occupancy heuristic
//! - [`search`]: Fixed-depth alpha-beta search
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Board plus side to move
//! - [`cli`] and [`ui`]: terminal and graphical front ends
//!
//! # Quick Start
//!
//! ```
//! use pentago::{AIEngine, EngineConfig, Game};
//!
//! let mut game = Game::new();
//! let engine = AIEngine::with_config(EngineConfig { max_depth: 1, ..Default::default() });
//!
//! // AI plays White's opening move
//! if let Some(mv) = engine.get_move(&game.board, game.turn) {
//!     assert!(game.make_move(mv));
//!     println!("AI plays {}", mv);
//! }
//! print!("{}", game);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Move, Piece, Pos, BOARD_SIZE};
pub use config::{Args, EngineConfig, Strategy};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{PentagoError, Result};
pub use game::{Game, GameStatus};
