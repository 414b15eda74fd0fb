//! Search module for the Pentago AI
//!
//! Contains:
//! - Fixed-depth Alpha-Beta minimax
//! - Optional root split across scoped threads

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH};
