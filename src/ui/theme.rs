//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BACKGROUND: Color32 = Color32::BLACK;
pub const GRID_LINE: Color32 = Color32::from_rgb(255, 0, 0);
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Text colors
pub const TEXT_ACCENT: Color32 = Color32::from_rgb(255, 0, 0);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 100, 100);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 20)
}

// Sizes, relative to a 500px board
pub const REFERENCE_WIDTH: f32 = 500.0;
pub const GRID_LINE_WIDTH: f32 = 15.0;
pub const CIRCLE_WIDTH: f32 = 15.0;
pub const CROSS_WIDTH: f32 = 25.0;
pub const WIN_LINE_WIDTH: f32 = 8.0;
pub const BASE_FONT_SIZE: f32 = 74.0;

/// Scale a reference-size measurement to the current width
#[inline]
pub fn scaled(size: f32, width: f32) -> f32 {
    size * width / REFERENCE_WIDTH
}

/// Banner and menu font size for a window of the given width
#[inline]
pub fn font_size_for_width(width: f32) -> f32 {
    scaled(BASE_FONT_SIZE, width)
}
