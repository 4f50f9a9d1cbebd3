//! Theme constants for the Slideways GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 49, 56);
pub const SENTINEL_CELL: Color32 = Color32::from_rgb(58, 61, 68);
pub const EMPTY_CELL: Color32 = Color32::from_rgb(222, 214, 196);
pub const CELL_BORDER: Color32 = Color32::from_rgb(120, 110, 95);

// Player colors
pub const PLAYER_ONE: Color32 = Color32::from_rgb(214, 69, 65);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(52, 120, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 210, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Shift buttons
pub const SHIFT_ENABLED: Color32 = Color32::from_rgb(90, 150, 110);
pub const SHIFT_DISABLED: Color32 = Color32::from_rgb(70, 72, 78);

// Functions for colors that can't be const
pub fn legal_highlight() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn player_color(player: Player) -> Color32 {
    match player {
        Player::One => PLAYER_ONE,
        Player::Two => PLAYER_TWO,
    }
}

/// Translucent player color for previews
pub fn player_preview(player: Player) -> Color32 {
    let c = player_color(player);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 110)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const CELL_GAP: f32 = 4.0;
pub const MARK_RADIUS_RATIO: f32 = 0.36;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const MAX_CELL_SIZE: f32 = 72.0;
