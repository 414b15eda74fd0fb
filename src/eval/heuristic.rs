//! Heuristic evaluation function for Pentago board positions
//!
//! Pentago pieces move whenever their quadrant turns, so a line that looks
//! blocked now may open after a rotation. The evaluation approximates this
//! in two passes:
//! - Spread every cell over the four places a rotation of its quadrant can
//!   carry it, giving each cell a rough chance of holding each color later
//! - For every same-color span, multiply those chances over the cells the
//!   span still needs to reach five
//!
//! Black spans add to the score and White spans subtract from it.

use crate::board::{Board, Piece, Pos, BOARD_SIZE, QUADRANT_SIZE};
use crate::rules::{check_winner, WIN_LENGTH};

use super::weights::{EvalScore, HeuristicWeights};

/// Estimated chance of a cell holding each color after future rotations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellWeights {
    pub white: f32,
    pub black: f32,
}

impl CellWeights {
    #[inline]
    pub fn for_color(&self, color: Piece) -> f32 {
        match color {
            Piece::White => self.white,
            Piece::Black => self.black,
            Piece::Empty => 0.0,
        }
    }
}

/// Per-cell occupancy estimates, indexed `[row][col]`
pub type OccupancyGrid = [[CellWeights; BOARD_SIZE]; BOARD_SIZE];

/// Build the future-occupancy model.
///
/// A piece credits `occupied` of its color to itself and to each cell a
/// rotation of its quadrant can move it to. An empty cell credits
/// `occupied * empty_share` to both colors the same way. Quadrant centres
/// never move, so all four credits land on the centre itself. With the
/// default weights every value stays within [0, 1].
pub fn occupancy(board: &Board, weights: &HeuristicWeights) -> OccupancyGrid {
    let mut grid: OccupancyGrid = [[CellWeights::default(); BOARD_SIZE]; BOARD_SIZE];
    let empty = weights.occupied * weights.empty_share;

    for idx in 0..BOARD_SIZE * BOARD_SIZE {
        let pos = Pos::from_index(idx);
        let (white, black) = match board.get(pos) {
            Piece::White => (weights.occupied, 0.0),
            Piece::Black => (0.0, weights.occupied),
            Piece::Empty => (empty, empty),
        };

        let mut image = pos;
        for _ in 0..4 {
            let cell = &mut grid[image.row as usize][image.col as usize];
            cell.white += white;
            cell.black += black;
            image = image.rotated_cw();
        }
    }

    grid
}

/// Run of same-color pieces starting at a cell and extending forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub delta: (i8, i8),
    pub len: u8,
    pub color: Piece,
}

/// Directions scanned from a cell. Diagonals only matter for cells on a
/// diagonal long enough to hold five.
fn span_directions(pos: Pos) -> impl Iterator<Item = (i8, i8)> {
    let (r, c) = (pos.row as i32, pos.col as i32);
    [
        ((0, 1), true),
        ((1, 0), true),
        ((1, 1), (r - c).abs() <= 1),
        ((-1, 1), (4..=6).contains(&(r + c))),
    ]
    .into_iter()
    .filter_map(|(delta, on_line)| on_line.then_some(delta))
}

/// Measure the span starting at `pos` in direction `delta`.
///
/// The scan stops at the board edge, at a different color, or when a step
/// lands on a row or column that is a multiple of the quadrant size.
fn span_at(board: &Board, pos: Pos, delta: (i8, i8)) -> Span {
    let color = board.get(pos);
    let (dr, dc) = (delta.0 as i32, delta.1 as i32);
    let (mut r, mut c) = (pos.row as i32, pos.col as i32);
    let mut len = 0u8;

    loop {
        len += 1;
        r += dr;
        c += dc;
        if !Pos::is_valid(r, c) || on_quadrant_line(r, c) {
            break;
        }
        if board.get(Pos::new(r as u8, c as u8)) != color {
            break;
        }
    }

    Span {
        start: pos,
        delta,
        len,
        color,
    }
}

#[inline]
fn on_quadrant_line(r: i32, c: i32) -> bool {
    let q = QUADRANT_SIZE as i32;
    r % q == 0 || c % q == 0
}

/// All spans starting at an occupied cell. Empty cells have none.
pub fn spans_from(board: &Board, pos: Pos) -> Vec<Span> {
    if board.is_empty(pos) {
        return Vec::new();
    }
    span_directions(pos)
        .map(|delta| span_at(board, pos, delta))
        .collect()
}

/// Chance that a span grows into five: the product of its color's weight
/// over the cells it still needs, looking up to `5 - len` cells before its
/// start and as many past its end, stopping at the board edge.
fn span_probability(span: &Span, grid: &OccupancyGrid) -> f32 {
    let needed = WIN_LENGTH.saturating_sub(span.len as usize);
    let (dr, dc) = (span.delta.0 as i32, span.delta.1 as i32);
    let (r0, c0) = (span.start.row as i32, span.start.col as i32);
    let len = span.len as i32;

    let mut prob = 1.0f32;
    // Behind the start, then past the end
    for (mut r, mut c, sign) in [(r0 - dr, c0 - dc, -1), (r0 + dr * len, c0 + dc * len, 1)] {
        for _ in 0..needed {
            if !Pos::is_valid(r, c) {
                break;
            }
            prob *= grid[r as usize][c as usize].for_color(span.color);
            r += sign * dr;
            c += sign * dc;
        }
    }
    prob
}

/// Evaluate the board with the default weights.
///
/// Returns a score where:
/// - Positive values favour Black, negative values favour White
/// - `EvalScore::BLACK_WIN` / `EvalScore::WHITE_WIN` mark a position that
///   already has five in a row
#[must_use]
pub fn evaluate(board: &Board) -> f32 {
    evaluate_with(board, &HeuristicWeights::default())
}

/// Evaluate the board with explicit occupancy weights
#[must_use]
pub fn evaluate_with(board: &Board, weights: &HeuristicWeights) -> f32 {
    let winner = check_winner(board);
    if winner != Piece::Empty {
        return EvalScore::win_for(winner);
    }

    let grid = occupancy(board, weights);
    let mut score = 0.0f32;

    for idx in 0..BOARD_SIZE * BOARD_SIZE {
        let pos = Pos::from_index(idx);
        for span in spans_from(board, pos) {
            if span.len as usize >= WIN_LENGTH {
                return EvalScore::win_for(span.color);
            }
            let prob = span_probability(&span, &grid);
            match span.color {
                Piece::Black => score += prob,
                Piece::White => score -= prob,
                Piece::Empty => {}
            }
        }
    }

    score
}
