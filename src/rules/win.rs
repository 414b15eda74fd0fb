//! Win condition checking for Pentago
//!
//! A player wins with five of their pieces in a row, column or diagonal.
//! Only 32 five-cell windows exist on a 6x6 board, grouped into 18 lines:
//! six rows, six columns, the two long diagonals and four short diagonals.

use crate::board::{Board, Piece, Pos};

/// Cells needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// A straight line of cells that can hold a five
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (i8, i8),
    pub delta: (i8, i8),
    /// 6 for rows, columns and long diagonals; 5 for short diagonals
    pub len: u8,
}

const fn line(row: i8, col: i8, dr: i8, dc: i8, len: u8) -> Line {
    Line {
        start: (row, col),
        delta: (dr, dc),
        len,
    }
}

/// Every line, in scan order: rows, columns, the two long diagonals, then
/// the four short diagonals.
pub const LINES: [Line; 18] = [
    // Rows
    line(0, 0, 0, 1, 6),
    line(1, 0, 0, 1, 6),
    line(2, 0, 0, 1, 6),
    line(3, 0, 0, 1, 6),
    line(4, 0, 0, 1, 6),
    line(5, 0, 0, 1, 6),
    // Columns
    line(0, 0, 1, 0, 6),
    line(0, 1, 1, 0, 6),
    line(0, 2, 1, 0, 6),
    line(0, 3, 1, 0, 6),
    line(0, 4, 1, 0, 6),
    line(0, 5, 1, 0, 6),
    // Main and anti-diagonal
    line(0, 0, 1, 1, 6),
    line(5, 0, -1, 1, 6),
    // Short diagonals beside them
    line(0, 1, 1, 1, 5),
    line(1, 0, 1, 1, 5),
    line(4, 0, -1, 1, 5),
    line(5, 1, -1, 1, 5),
];

impl Line {
    #[inline]
    fn cell(&self, i: usize) -> Pos {
        let i = i as i8;
        Pos::new(
            (self.start.0 + self.delta.0 * i) as u8,
            (self.start.1 + self.delta.1 * i) as u8,
        )
    }

    /// First index of the only five-cell window that can win on this line.
    ///
    /// On a six-cell line a five either covers index 0, which forces cells 0
    /// and 1 to match, or it starts at index 1. Comparing the first two cells
    /// therefore picks the window that holds the run if one exists.
    #[inline]
    fn window_start(&self, board: &Board) -> usize {
        let mut start = 0;
        for _ in WIN_LENGTH..self.len as usize {
            if board.get(self.cell(start)) != board.get(self.cell(start + 1)) {
                start += 1;
            }
        }
        start
    }

    /// Color holding the winning window of this line, or `Empty`
    pub fn winner(&self, board: &Board) -> Piece {
        let start = self.window_start(board);
        let color = board.get(self.cell(start));
        if color == Piece::Empty {
            return Piece::Empty;
        }
        if (start + 1..start + WIN_LENGTH).all(|i| board.get(self.cell(i)) == color) {
            color
        } else {
            Piece::Empty
        }
    }

    /// Cells of the five-cell window `winner` inspects
    pub fn window(&self, board: &Board) -> [Pos; WIN_LENGTH] {
        let start = self.window_start(board);
        std::array::from_fn(|i| self.cell(start + i))
    }
}

/// Color of the first five-in-a-row found in scan order, or `Empty`.
///
/// After a rotation both colors can hold a five at once; the scan order
/// decides which one is reported.
pub fn check_winner(board: &Board) -> Piece {
    LINES
        .iter()
        .map(|line| line.winner(board))
        .find(|&color| color != Piece::Empty)
        .unwrap_or(Piece::Empty)
}

/// Winning color and the five cells that form its line
pub fn winning_line(board: &Board) -> Option<(Piece, [Pos; WIN_LENGTH])> {
    LINES.iter().find_map(|line| match line.winner(board) {
        Piece::Empty => None,
        color => Some((color, line.window(board))),
    })
}

/// First move in generation order after which `color` is reported as the
/// winner.
pub fn find_winning_move(board: &Board, color: Piece) -> Option<crate::board::Move> {
    board.valid_moves().into_iter().find(|&mv| {
        let mut child = *board;
        child.apply_move(mv, color);
        check_winner(&child) == color
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Move};

    fn set_all(board: &mut Board, cells: &[(u8, u8)], piece: Piece) {
        for &(r, c) in cells {
            board.set(Pos::new(r, c), piece);
        }
    }

    #[test]
    fn test_empty_board_no_winner() {
        assert_eq!(check_winner(&Board::new()), Piece::Empty);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::from_rows(&[
            "W W W W W .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
        ])
        .unwrap();
        assert_eq!(check_winner(&board), Piece::White);

        set_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Piece::Black);
        assert_eq!(check_winner(&board), Piece::Black);
    }

    #[test]
    fn test_row_win_at_offset_one() {
        for row in [". B B B B B", "W B B B B B", "B B B B B B"] {
            let mut rows = [". . . . . ."; 6];
            rows[4] = row;
            let board = Board::from_rows(&rows).unwrap();
            assert_eq!(check_winner(&board), Piece::Black, "row {:?}", row);
        }
    }

    #[test]
    fn test_broken_row_no_winner() {
        for row in ["W W W W . W", "W . W W W W", "B W W W W B"] {
            let mut rows = [". . . . . ."; 6];
            rows[2] = row;
            let board = Board::from_rows(&rows).unwrap();
            assert_eq!(check_winner(&board), Piece::Empty, "row {:?}", row);
        }
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        set_all(&mut board, &[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)], Piece::White);
        assert_eq!(check_winner(&board), Piece::White);

        board.set(Pos::new(3, 2), Piece::Black);
        assert_eq!(check_winner(&board), Piece::Empty);
    }

    #[test]
    fn test_short_diagonal_win() {
        let mut board = Board::new();
        set_all(&mut board, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)], Piece::White);
        assert_eq!(check_winner(&board), Piece::White);

        let mut board = Board::new();
        set_all(&mut board, &[(5, 1), (4, 2), (3, 3), (2, 4), (1, 5)], Piece::Black);
        assert_eq!(check_winner(&board), Piece::Black);
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut board = Board::new();
        set_all(&mut board, &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)], Piece::Black);
        assert_eq!(check_winner(&board), Piece::Black);

        board.set(Pos::new(3, 3), Piece::White);
        assert_eq!(check_winner(&board), Piece::Empty);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        set_all(&mut board, &[(5, 0), (4, 1), (3, 2), (2, 3), (1, 4)], Piece::White);
        assert_eq!(check_winner(&board), Piece::White);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new();
        set_all(&mut board, &[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)], Piece::White);
        set_all(&mut board, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Piece::Black);
        assert_eq!(check_winner(&board), Piece::White);
    }

    #[test]
    fn test_winning_line_cells() {
        let mut board = Board::new();
        let cells = [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)];
        set_all(&mut board, &cells, Piece::Black);

        let (color, line) = winning_line(&board).unwrap();
        assert_eq!(color, Piece::Black);
        let expected: Vec<Pos> = cells.iter().map(|&(r, c)| Pos::new(r, c)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_find_winning_move_skips_rotations_that_break_the_row() {
        // (1,0) completes the row, but rotating quadrant 0 or 1 afterwards
        // moves a piece out of row 1; quadrant 2 is the first safe rotation.
        let board = Board::from_rows(&[
            ". . . . . .",
            ". W W W W .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
        ])
        .unwrap();
        let mv = find_winning_move(&board, Piece::White).unwrap();
        let mut child = board;
        assert!(child.apply_move(mv, Piece::White));
        assert_eq!(check_winner(&child), Piece::White);
        assert!(find_winning_move(&board, Piece::Black).is_none());
        assert_eq!(mv, Move::new(Pos::new(1, 0), 2, Direction::Clockwise));
    }
}
