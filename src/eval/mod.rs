//! Evaluation module for Pentago positions
//!
//! Scores are signed: positive favours Black, negative favours White.
//! The static evaluation combines:
//! - A future-occupancy model spreading each cell over its rotation images
//! - Win likelihood of every same-color span, from that model
//! - Extremal scores for positions that are already won

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_with, occupancy, spans_from, CellWeights, OccupancyGrid, Span};
pub use weights::{EvalScore, HeuristicWeights};
