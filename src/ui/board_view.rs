//! Board rendering for the Pentago GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{quadrant_origin, NUM_QUADRANTS, QUADRANT_SIZE};
use crate::{Board, Direction, Move, Piece, Pos, BOARD_SIZE};

use super::theme::*;

/// What the user clicked on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    Cell(Pos),
    Rotate(u8, Direction),
}

/// Everything the view needs besides the board itself
pub struct BoardViewState<'a> {
    pub board: &'a Board,
    pub current_turn: Piece,
    pub selected: Option<Pos>,
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    pub winning_line: Option<[Pos; 5]>,
    /// Human input accepted this frame
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the click, if any
    pub fn show(&mut self, ui: &mut egui::Ui, view: &BoardViewState<'_>) -> Option<BoardInput> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN - QUADRANT_GAP) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let active_quadrant = view.last_move.map(|mv| mv.quadrant);
        self.draw_quadrants(&painter, active_quadrant);
        self.draw_pieces(&painter, view.board);

        if let Some(mv) = view.last_move {
            self.draw_last_move_marker(&painter, mv.landing());
        }

        if let Some(line) = view.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(mv) = view.suggested_move {
            self.draw_suggestion(&painter, mv.pos, view.current_turn);
        }

        if !view.interactive {
            return None;
        }

        if let Some(pos) = view.selected {
            self.draw_piece(&painter, pos, view.current_turn);
        }

        let pointer = response.hover_pos();
        let clicked = response.clicked();

        if view.selected.is_some() {
            for (quadrant, direction) in Self::handles() {
                let center = self.handle_center(quadrant, direction);
                let hovered = pointer.is_some_and(|p| p.distance(center) <= HANDLE_RADIUS);
                self.draw_handle(&painter, center, direction, hovered);
                if hovered && clicked {
                    return Some(BoardInput::Rotate(quadrant, direction));
                }
            }
        }

        let board_pos = pointer.and_then(|p| self.screen_to_board(p))?;
        let is_valid = view.board.is_empty(board_pos);
        if view.selected != Some(board_pos) {
            let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
            self.draw_hover_preview(&painter, board_pos, view.current_turn, is_valid, hover_color);
        }

        (clicked && is_valid).then_some(BoardInput::Cell(board_pos))
    }

    /// Four quadrant tiles with a hole per cell
    fn draw_quadrants(&self, painter: &Painter, active: Option<u8>) {
        let size = QUADRANT_SIZE as f32 * self.cell_size;
        for quadrant in 0..NUM_QUADRANTS {
            let (top, left) = quadrant_origin(quadrant);
            let min = self.cell_min(Pos::new(top, left));
            let rect = Rect::from_min_size(min, Vec2::splat(size));
            let fill = if active == Some(quadrant) { QUADRANT_ACTIVE } else { QUADRANT_BG };
            painter.rect_filled(rect, CornerRadius::same(10), fill);
        }

        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let center = self.board_to_screen(Pos::from_index(idx));
            painter.circle_filled(center, self.cell_size * HOLE_RADIUS_RATIO, HOLE);
        }
    }

    /// Draw all placed pieces
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let piece = board.get(pos);
            if piece != Piece::Empty {
                self.draw_piece(painter, pos, piece);
            }
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, pos: Pos, piece: Piece) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match piece {
            Piece::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_PIECE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_PIECE_HIGHLIGHT);
            }
            Piece::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
            Piece::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Draw move suggestion (the rotation is listed in the side panel)
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Piece) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let color = match turn {
            Piece::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 100),
            Piece::White => Color32::from_rgba_unmultiplied(240, 240, 240, 100),
            Piece::Empty => return,
        };

        painter.circle_filled(center, radius, color);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            if turn == Piece::Black { WHITE_PIECE } else { BLACK_PIECE },
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Piece, is_valid: bool, hover_color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Piece::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Piece::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Piece::Empty => return,
            }
        } else {
            hover_color
        };

        painter.circle_filled(center, radius, color);
    }

    fn draw_handle(&self, painter: &Painter, center: Pos2, direction: Direction, hovered: bool) {
        let fill = if hovered { HANDLE_HOVER } else { HANDLE_BG };
        painter.circle_filled(center, HANDLE_RADIUS, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            direction.abbrev(),
            egui::FontId::proportional(11.0),
            TEXT_PRIMARY,
        );
    }

    /// Every rotation handle: one per quadrant and direction
    fn handles() -> impl Iterator<Item = (u8, Direction)> {
        (0..NUM_QUADRANTS).flat_map(|q| Direction::ALL.into_iter().map(move |d| (q, d)))
    }

    /// Handles sit in the margin next to the quadrant's outer corner:
    /// clockwise along the top or bottom edge, counter-clockwise along the
    /// left or right edge.
    fn handle_center(&self, quadrant: u8, direction: Direction) -> Pos2 {
        let (top, left) = quadrant_origin(quadrant);
        let middle = self.board_to_screen(Pos::new(top + 1, left + 1));
        let edge = BOARD_MARGIN * 0.5;
        match direction {
            Direction::Clockwise => {
                let y = if top == 0 {
                    self.board_rect.min.y + edge
                } else {
                    self.board_rect.max.y - edge
                };
                Pos2::new(middle.x, y)
            }
            Direction::CounterClockwise => {
                let x = if left == 0 {
                    self.board_rect.min.x + edge
                } else {
                    self.board_rect.max.x - edge
                };
                Pos2::new(x, middle.y)
            }
        }
    }

    /// Offset of a cell's leading edge from the board corner, along one axis
    #[inline]
    fn axis_offset(&self, index: u8) -> f32 {
        let gap = if index as usize >= QUADRANT_SIZE { QUADRANT_GAP } else { 0.0 };
        BOARD_MARGIN + index as f32 * self.cell_size + gap
    }

    /// Cell index covering `offset` along one axis; `None` in margins and gaps
    fn axis_index(&self, offset: f32) -> Option<u8> {
        (0..BOARD_SIZE as u8).find(|&i| {
            let start = self.axis_offset(i);
            offset >= start && offset < start + self.cell_size
        })
    }

    fn cell_min(&self, pos: Pos) -> Pos2 {
        self.board_rect.min + Vec2::new(self.axis_offset(pos.col), self.axis_offset(pos.row))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = self.axis_index(relative.x)?;
        let row = self.axis_index(relative.y)?;
        Some(Pos::new(row, col))
    }

    /// Convert board position to screen coordinates (cell centre)
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_min(pos) + Vec2::splat(self.cell_size * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(2.0 * BOARD_MARGIN + QUADRANT_GAP + 300.0)),
        }
    }

    #[test]
    fn test_screen_board_round_trip() {
        let view = view();
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_margins_and_gap_are_not_cells() {
        let view = view();
        let min = view.board_rect.min;
        assert_eq!(view.screen_to_board(min + Vec2::splat(1.0)), None);

        let gap_x = BOARD_MARGIN + 3.0 * 50.0 + QUADRANT_GAP * 0.5;
        assert_eq!(view.screen_to_board(min + Vec2::new(gap_x, BOARD_MARGIN + 10.0)), None);
    }

    #[test]
    fn test_handles_stay_off_the_cells() {
        let view = view();
        for (quadrant, direction) in BoardView::handles() {
            let center = view.handle_center(quadrant, direction);
            assert_eq!(view.screen_to_board(center), None, "{} {:?}", quadrant, direction);
        }
        assert_eq!(BoardView::handles().count(), 8);
    }
}
