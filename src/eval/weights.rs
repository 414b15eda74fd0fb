//! Score constants and tunable heuristic weights
//!
//! The occupancy constants were chosen by hand and tuned by play, not
//! derived from a probability model. They are kept as plain data so the
//! engine configuration can override them.

/// Fixed scores
pub struct EvalScore;

impl EvalScore {
    /// Black has five in a row. Dominates any heuristic value, which is at
    /// most one per span (36 cells x 4 directions).
    pub const BLACK_WIN: f32 = 10_000.0;
    /// White has five in a row
    pub const WHITE_WIN: f32 = -10_000.0;
    /// Full board without a winner
    pub const DRAW: f32 = 0.0;

    /// Extremal score for a winning color, 0 for `Empty`
    #[inline]
    pub fn win_for(color: crate::board::Piece) -> f32 {
        match color {
            crate::board::Piece::Black => Self::BLACK_WIN,
            crate::board::Piece::White => Self::WHITE_WIN,
            crate::board::Piece::Empty => Self::DRAW,
        }
    }
}

/// Weights of the future-occupancy model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    /// Share of a piece credited to each of its 4 rotation images
    pub occupied: f32,
    /// Fraction of `occupied` an empty cell credits to each color
    pub empty_share: f32,
}

impl HeuristicWeights {
    pub const DEFAULT_OCCUPIED: f32 = 0.25;
    pub const DEFAULT_EMPTY_SHARE: f32 = 0.33;
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            occupied: Self::DEFAULT_OCCUPIED,
            empty_share: Self::DEFAULT_EMPTY_SHARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_win_scores_are_opposite() {
        assert_eq!(EvalScore::BLACK_WIN, -EvalScore::WHITE_WIN);
        assert_eq!(EvalScore::win_for(Piece::Black), EvalScore::BLACK_WIN);
        assert_eq!(EvalScore::win_for(Piece::White), EvalScore::WHITE_WIN);
        assert_eq!(EvalScore::win_for(Piece::Empty), EvalScore::DRAW);
    }

    #[test]
    fn test_default_weights_keep_cells_in_unit_range() {
        let w = HeuristicWeights::default();
        // Four images of an occupied cell sum to one
        assert!((4.0 * w.occupied - 1.0).abs() < 1e-6);
        assert!(w.empty_share > 0.0 && w.empty_share < 1.0);
    }
}
