//! Board representation for Pentago

pub mod board;
pub mod moves;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use moves::Move;

/// Board size (6x6)
pub const BOARD_SIZE: usize = 6;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 36

/// Side length of a rotatable quadrant
pub const QUADRANT_SIZE: usize = 3;
/// Quadrants are indexed 0-3 in row-major order
pub const NUM_QUADRANTS: u8 = 4;

/// Contents of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Black,
    White,
}

impl Piece {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
            Piece::Empty => Piece::Empty,
        }
    }

    /// Single-character glyph used by the text rendering
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Black => 'B',
            Piece::White => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Empty => "Empty",
            Piece::Black => "Black",
            Piece::White => "White",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Quadrant rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Both directions, in move generation order
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Numeric code used by the text prompt (0 = clockwise, 1 = counter-clockwise)
    #[inline]
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(Direction::Clockwise),
            1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        }
    }

    /// Short label (`CW` / `CCW`)
    pub fn abbrev(self) -> &'static str {
        match self {
            Direction::Clockwise => "CW",
            Direction::CounterClockwise => "CCW",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Index of the quadrant containing this position
    #[inline]
    pub fn quadrant(self) -> u8 {
        (self.row / QUADRANT_SIZE as u8) * 2 + self.col / QUADRANT_SIZE as u8
    }

    /// Coordinates inside the owning quadrant, each in 0..3
    #[inline]
    pub fn local(self) -> (u8, u8) {
        (self.row % QUADRANT_SIZE as u8, self.col % QUADRANT_SIZE as u8)
    }

    /// Where this cell ends up after one clockwise turn of its quadrant.
    ///
    /// Clockwise writes `new(i, j) = old(2 - j, i)`, so the piece at local
    /// `(i, j)` moves to `(j, 2 - i)`.
    #[inline]
    pub fn rotated_cw(self) -> Pos {
        let (top, left) = quadrant_origin(self.quadrant());
        let (i, j) = self.local();
        Pos::new(top + j, left + 2 - i)
    }
}

/// Top-left corner `(row, col)` of a quadrant
#[inline]
pub fn quadrant_origin(quadrant: u8) -> (u8, u8) {
    let size = QUADRANT_SIZE as u8;
    (size * (quadrant / 2), size * (quadrant % 2))
}
