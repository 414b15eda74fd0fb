//! Main AI engine integrating the search components
//!
//! The engine picks a move in two steps:
//!
//! 1. **Immediate win**: any placement and rotation that leaves the mover
//!    reported as the winner is played without searching
//! 2. **Alpha-Beta**: fixed-depth minimax over the heuristic evaluator
//!
//! # Example
//!
//! ```
//! use pentago::{AIEngine, Board, EngineConfig, Piece, Pos};
//!
//! // Shallow search keeps the example fast
//! let engine = AIEngine::with_config(EngineConfig { max_depth: 1, ..Default::default() });
//! let mut board = Board::new();
//! board.set(Pos::new(1, 1), Piece::White);
//!
//! let result = engine.get_move_with_stats(&board, Piece::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Move, Piece};
use crate::config::{EngineConfig, Strategy};
use crate::eval::EvalScore;
use crate::rules::find_winning_move;
use crate::search::{SearchResult, Searcher};

/// Phase of the engine that produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that wins on the spot
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Uniform random choice
    Random,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the position from Black's point of view
    pub score: f32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(mv: Move, color: Piece, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: EvalScore::win_for(color),
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn random(mv: Option<Move>, time_ms: u64) -> Self {
        Self {
            best_move: mv,
            score: EvalScore::DRAW,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI engine for Pentago.
///
/// Stateless between calls apart from its configuration, so one engine can
/// serve both colors.
///
/// # Example
///
/// ```
/// use pentago::{AIEngine, Board, EngineConfig, Piece};
///
/// let engine = AIEngine::with_config(EngineConfig { max_depth: 1, ..Default::default() });
/// let board = Board::new();
/// if let Some(mv) = engine.get_move(&board, Piece::White) {
///     println!("{}", mv);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration (depth 3, one thread)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = Searcher::new(config.max_depth)
            .with_threads(config.threads)
            .with_weights(config.weights);
        Self { config, searcher }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }


    /// Best move for `color`, or `None` if the board is full
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Piece) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move with search statistics.
    ///
    /// An immediate win is returned without searching; otherwise the
    /// alpha-beta result is reported as is.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, color: Piece) -> MoveResult {
        let start = Instant::now();

        if let Some(mv) = find_winning_move(board, color) {
            let result = MoveResult::immediate_win(mv, color, elapsed_ms(start));
            debug!(%color, %mv, "immediate win");
            return result;
        }

        let search = self.searcher.search(board, color);
        let stats = search.stats.clone();
        let result = MoveResult::from_alphabeta(search, elapsed_ms(start));
        debug!(
            %color,
            depth = self.config.max_depth,
            nodes = result.nodes,
            cutoffs = stats.cutoffs,
            leaves = stats.leaf_evaluations,
            score = result.score,
            time_ms = result.time_ms,
            "alpha-beta search finished"
        );
        result
    }

    /// Move chosen by `strategy`; `None` for [`Strategy::Human`] or a full
    /// board.
    #[must_use]
    pub fn choose(&self, strategy: Strategy, board: &Board, color: Piece) -> Option<MoveResult> {
        match strategy {
            Strategy::Human => None,
            Strategy::Random => {
                let start = Instant::now();
                let mv = board.random_move()?;
                Some(MoveResult::random(Some(mv), elapsed_ms(start)))
            }
            Strategy::Ai => {
                let result = self.get_move_with_stats(board, color);
                result.best_move.map(|_| result)
            }
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
