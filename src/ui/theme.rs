//! Theme constants for the Pentago GUI

use egui::Color32;

// Board colors - red wood quadrants on a dark frame
pub const BOARD_BG: Color32 = Color32::from_rgb(48, 30, 24);
pub const QUADRANT_BG: Color32 = Color32::from_rgb(178, 62, 48);
pub const QUADRANT_ACTIVE: Color32 = Color32::from_rgb(204, 84, 66);
pub const HOLE: Color32 = Color32::from_rgb(120, 38, 30);

// Piece colors with better contrast
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(240, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const HANDLE_BG: Color32 = Color32::from_rgb(60, 62, 66);
pub const HANDLE_HOVER: Color32 = Color32::from_rgb(95, 98, 105);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 48.0;
pub const QUADRANT_GAP: f32 = 8.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const HOLE_RADIUS_RATIO: f32 = 0.16;
pub const HANDLE_RADIUS: f32 = 16.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
