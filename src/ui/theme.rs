//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const GLYPH_SCALE: f32 = 0.78; // glyph size relative to square
pub const MOVE_DOT_SCALE: f32 = 0.28;
pub const MIN_SQUARE_SIZE: f32 = 30.0;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 560.0;
pub const INITIAL_RIGHT_PANEL: f32 = 300.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const SELECTED_SQUARE: u32 = 0x7fa650;
pub const LAST_MOVE_FROM: u32 = 0xd9c76a;
pub const LAST_MOVE_TO: u32 = 0xc9b44a;
pub const CHECK_SQUARE: u32 = 0xe05a4f;
pub const MOVE_DOT: u32 = 0x2f4a2a;

// Piece glyph colors
pub const WHITE_PIECE: u32 = 0xfdfdfd;
pub const BLACK_PIECE: u32 = 0x161616;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const MOVE_NUMBER: u32 = 0x9fb6d9;
pub const THINKING: u32 = 0xfbbf24;

// Modal colors
pub const OVERLAY_BG: u32 = 0x0000008c; // rgba
pub const MODAL_BG: u32 = 0x23272e;

/// Base color of a board square
pub fn square_color(is_light: bool) -> Rgba {
    if is_light {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
