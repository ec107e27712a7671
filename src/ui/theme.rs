//! Theme constants for the Ta-Te-Ti GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(238, 232, 213);
pub const CELL_HOVER: Color32 = Color32::from_rgb(225, 218, 196);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 55, 50);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(210, 70, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 110, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 160, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);
pub const DRAW_ACCENT: Color32 = Color32::from_rgb(170, 170, 180);

/// Translucent mark colour for previews and hints
pub fn ghost(stone_color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(stone_color.r(), stone_color.g(), stone_color.b(), alpha)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Colour used to draw a player's mark
pub fn mark_color(stone: crate::Stone) -> Color32 {
    match stone {
        crate::Stone::X => X_MARK,
        crate::Stone::O => O_MARK,
        crate::Stone::Empty => TEXT_MUTED,
    }
}
