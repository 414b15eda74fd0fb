//! Board structure with placement and quadrant rotation

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{quadrant_origin, Direction, Move, Piece, Pos, BOARD_SIZE, NUM_QUADRANTS, QUADRANT_SIZE};

/// Game board: a 6x6 grid of pieces, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from its rendered rows (`" . W B . W ."` or `".WB.W."`).
    ///
    /// Whitespace is ignored; `B`, `W` and `.` are the only accepted glyphs.
    /// Returns `None` when the shape or a glyph is wrong.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != BOARD_SIZE {
            return None;
        }
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return None;
            }
            for (c, glyph) in glyphs.into_iter().enumerate() {
                board.cells[r][c] = match glyph {
                    '.' => Piece::Empty,
                    'B' => Piece::Black,
                    'W' => Piece::White,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Piece::Empty
    }

    /// Overwrite a cell unconditionally. Test setup only; game moves go
    /// through [`Board::place`] or [`Board::apply_move`].
    #[inline]
    pub fn set(&mut self, pos: Pos, piece: Piece) {
        self.cells[pos.row as usize][pos.col as usize] = piece;
    }

    /// Place a piece on an empty cell. Returns false, leaving the board
    /// untouched, if the cell is occupied.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.set(pos, piece);
        true
    }

    /// Rotate one quadrant a quarter turn in place.
    ///
    /// The eight perimeter cells are read into a snapshot first and every
    /// write comes from that snapshot; the centre cell never moves.
    pub fn rotate(&mut self, quadrant: u8, direction: Direction) {
        debug_assert!(quadrant < NUM_QUADRANTS);
        let (top, left) = quadrant_origin(quadrant);
        let (top, left) = (top as usize, left as usize);

        let mut old = [[Piece::Empty; QUADRANT_SIZE]; QUADRANT_SIZE];
        for (i, row) in old.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[top + i][left..left + QUADRANT_SIZE]);
        }

        for i in 0..QUADRANT_SIZE {
            for j in 0..QUADRANT_SIZE {
                if i == 1 && j == 1 {
                    continue;
                }
                self.cells[top + i][left + j] = match direction {
                    Direction::Clockwise => old[2 - j][i],
                    Direction::CounterClockwise => old[j][2 - i],
                };
            }
        }
    }

    /// Execute a move for `piece`: place, then rotate.
    ///
    /// Returns false with no mutation if the target cell is occupied.
    pub fn apply_move(&mut self, mv: Move, piece: Piece) -> bool {
        if !self.place(mv.pos, piece) {
            return false;
        }
        self.rotate(mv.quadrant, mv.direction);
        true
    }

    /// All legal moves: for every empty cell in row-major order, each
    /// quadrant 0-3 in both directions.
    pub fn valid_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.empty_count() * 8);
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if !self.is_empty(pos) {
                    continue;
                }
                for quadrant in 0..NUM_QUADRANTS {
                    for direction in Direction::ALL {
                        moves.push(Move::new(pos, quadrant, direction));
                    }
                }
            }
        }
        moves
    }

    /// Uniformly random legal move, or `None` if the board is full
    pub fn random_move(&self) -> Option<Move> {
        self.random_move_with(&mut rand::rng())
    }

    /// Uniformly random legal move drawn from `rng`
    pub fn random_move_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.valid_moves().choose(rng).copied()
    }

    /// Best move for `color` from a default-depth alpha-beta search.
    ///
    /// `None` when the board is full.
    pub fn best_move(&self, color: Piece) -> Option<Move> {
        crate::search::Searcher::default().search(self, color).best_move
    }

    /// Color with five in a row, or `Empty`
    #[inline]
    pub fn check_winner(&self) -> Piece {
        crate::rules::check_winner(self)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&p| p == Piece::Empty)
            .count()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.empty_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count() == BOARD_SIZE * BOARD_SIZE
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for piece in row {
                write!(f, " {}", piece.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
