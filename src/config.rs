//! Command-line arguments and engine configuration

use clap::{Parser, ValueEnum};

use crate::eval::HeuristicWeights;
use crate::search::DEFAULT_DEPTH;

/// How a side picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Moves typed at the prompt (or clicked in the GUI)
    Human,
    /// Uniformly random legal move
    Random,
    /// Alpha-beta search
    #[default]
    Ai,
}

impl Strategy {
    #[inline]
    pub fn is_automated(self) -> bool {
        self != Strategy::Human
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Human => "Human",
            Strategy::Random => "Random",
            Strategy::Ai => "AI",
        }
    }
}

/// Search settings shared by the terminal loop and the GUI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Plies searched before the heuristic is applied
    pub max_depth: u8,
    /// Threads for the root split; 1 searches sequentially
    pub threads: usize,
    pub weights: HeuristicWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            threads: 1,
            weights: HeuristicWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pentago", version, about = "Pentago with an alpha-beta opponent")]
pub struct Args {
    /// Strategy for White, who moves first
    #[arg(value_enum, default_value_t = Strategy::Ai)]
    pub white: Strategy,

    /// Strategy for Black
    #[arg(value_enum, default_value_t = Strategy::Ai)]
    pub black: Strategy,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub depth: u8,

    /// Threads used to split the root moves
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Open the graphical board instead of the terminal game
    #[arg(long)]
    pub gui: bool,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_depth: self.depth,
            threads: self.threads.max(1),
            ..EngineConfig::default()
        }
    }
}
