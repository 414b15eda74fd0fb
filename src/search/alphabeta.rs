//! Alpha-Beta minimax search over Pentago positions
//!
//! Black maximises and White minimises a single signed score, so the side to
//! move is passed down the recursion instead of flipping signs.
//!
//! # Features
//!
//! - Fixed depth, no iterative deepening or transposition table
//! - Decided positions (five in a row) end the branch at any depth
//! - Each node searches a private copy of the board
//! - **Root split**: with `threads > 1` the root moves are divided between
//!   scoped threads, each searching its share with a full window
//!
//! # Example
//!
//! ```
//! use pentago::board::{Board, Piece, Pos};
//! use pentago::search::Searcher;
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.set(Pos::new(1, col), Piece::Black);
//! }
//!
//! let result = Searcher::new(1).search(&board, Piece::Black);
//! let mv = result.best_move.unwrap();
//! assert!(board.is_empty(mv.pos));
//! ```

use std::thread;

use tracing::trace;

use crate::board::{Board, Move, Piece};
use crate::eval::{evaluate_with, EvalScore, HeuristicWeights};

/// Infinity score for alpha-beta bounds
const INF: f32 = f32::INFINITY;

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 3;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves skipped because `beta <= alpha`
    pub cutoffs: u64,
    /// Leaves scored by the heuristic
    pub leaf_evaluations: u64,
    /// Nodes ended early by five in a row
    pub terminal_wins: u64,
    /// Nodes with no legal move left
    pub full_boards: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.cutoffs += other.cutoffs;
        self.leaf_evaluations += other.leaf_evaluations;
        self.terminal_wins += other.terminal_wins;
        self.full_boards += other.full_boards;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the position is already decided or the
    /// board is full
    pub best_move: Option<Move>,
    /// Minimax value of the position (positive favours Black)
    pub score: f32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

// =============================================================================
// WorkerSearcher: per-thread search state
// =============================================================================

/// Search state owned by one thread
struct WorkerSearcher<'a> {
    max_depth: u8,
    weights: &'a HeuristicWeights,
    nodes: u64,
    stats: SearchStats,
}

impl<'a> WorkerSearcher<'a> {
    fn new(max_depth: u8, weights: &'a HeuristicWeights) -> Self {
        Self {
            max_depth,
            weights,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Score of a node that needs no expansion, if any
    #[inline]
    fn terminal_score(&mut self, board: &Board, depth: u8) -> Option<f32> {
        let winner = board.check_winner();
        if winner != Piece::Empty {
            self.stats.terminal_wins += 1;
            return Some(EvalScore::win_for(winner));
        }
        if depth >= self.max_depth {
            self.stats.leaf_evaluations += 1;
            return Some(evaluate_with(board, self.weights));
        }
        None
    }

    /// Fail-hard alpha-beta. `mover` places next; Black raises `alpha`,
    /// White lowers `beta`. Returns the move that moved the bound and the
    /// final bound.
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mover: Piece,
        mut alpha: f32,
        mut beta: f32,
    ) -> (Option<Move>, f32) {
        debug_assert_ne!(mover, Piece::Empty);
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return (None, score);
        }

        let moves = board.valid_moves();
        if moves.is_empty() {
            self.stats.full_boards += 1;
            return (None, EvalScore::DRAW);
        }

        let maximizing = mover == Piece::Black;
        let mut best_move = None;

        for mv in moves {
            let mut child = *board;
            child.apply_move(mv, mover);
            let (_, score) = self.alpha_beta(&child, depth + 1, mover.opponent(), alpha, beta);

            if maximizing {
                if score > alpha {
                    alpha = score;
                    best_move = Some(mv);
                }
            } else if score < beta {
                beta = score;
                best_move = Some(mv);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_move, if maximizing { alpha } else { beta })
    }
}

// =============================================================================
// Searcher: public API
// =============================================================================

/// Fixed-depth alpha-beta searcher.
///
/// Holds only configuration; every call to [`Searcher::search`] starts
/// from scratch.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    num_threads: usize,
    weights: HeuristicWeights,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Searcher {
    /// Single-threaded searcher with the default heuristic weights
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            num_threads: 1,
            weights: HeuristicWeights::default(),
        }
    }

    /// Split root moves across `num_threads` threads (at least 1)
    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    /// Use explicit occupancy weights at the leaves
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Search for the best move for `color`.
    ///
    /// Root window is `(-inf, +inf)` at depth 0. `best_move` is `None` when
    /// the position already has a winner, the board is full, or the depth
    /// is 0.
    #[must_use]
    pub fn search(&self, board: &Board, color: Piece) -> SearchResult {
        if self.num_threads > 1 && self.max_depth > 0 {
            self.search_split(board, color)
        } else {
            self.search_single(board, color)
        }
    }

    fn search_single(&self, board: &Board, color: Piece) -> SearchResult {
        let mut worker = WorkerSearcher::new(self.max_depth, &self.weights);
        let (best_move, score) = worker.alpha_beta(board, 0, color, -INF, INF);

        SearchResult {
            best_move,
            score,
            depth: self.max_depth,
            nodes: worker.nodes,
            stats: worker.stats,
        }
    }

    /// Root-split search. Bounds are not shared between threads, so every
    /// root move gets an exact score; picking the first best in generation
    /// order gives the same move and score as [`Searcher::search_single`].
    fn search_split(&self, board: &Board, color: Piece) -> SearchResult {
        let mut root = WorkerSearcher::new(self.max_depth, &self.weights);
        root.nodes = 1;
        if let Some(score) = root.terminal_score(board, 0) {
            return SearchResult {
                best_move: None,
                score,
                depth: self.max_depth,
                nodes: root.nodes,
                stats: root.stats,
            };
        }

        let moves = board.valid_moves();
        if moves.is_empty() {
            root.stats.full_boards += 1;
            return SearchResult {
                best_move: None,
                score: EvalScore::DRAW,
                depth: self.max_depth,
                nodes: root.nodes,
                stats: root.stats,
            };
        }

        let chunk_size = moves.len().div_ceil(self.num_threads);
        let weights = &self.weights;
        let max_depth = self.max_depth;

        let branches: Vec<(Vec<(Move, f32)>, u64, SearchStats)> = thread::scope(|scope| {
            let handles: Vec<_> = moves
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        let mut worker = WorkerSearcher::new(max_depth, weights);
                        let scored: Vec<(Move, f32)> = chunk
                            .iter()
                            .map(|&mv| {
                                let mut child = *board;
                                child.apply_move(mv, color);
                                let (_, score) =
                                    worker.alpha_beta(&child, 1, color.opponent(), -INF, INF);
                                (mv, score)
                            })
                            .collect();
                        (scored, worker.nodes, worker.stats)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(branch) => branch,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let maximizing = color == Piece::Black;
        let mut best: Option<(Move, f32)> = None;
        let mut nodes = root.nodes;
        let mut stats = root.stats;

        for (scored, branch_nodes, branch_stats) in branches {
            nodes += branch_nodes;
            stats.merge(&branch_stats);
            for (mv, score) in scored {
                trace!(%mv, score, "root move");
                let better = match best {
                    None => true,
                    Some((_, best_score)) if maximizing => score > best_score,
                    Some((_, best_score)) => score < best_score,
                };
                if better {
                    best = Some((mv, score));
                }
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(EvalScore::DRAW, |(_, score)| score),
            depth: self.max_depth,
            nodes,
            stats,
        }
    }
}
