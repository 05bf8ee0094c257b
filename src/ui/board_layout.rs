//! Board layout calculations - square and glyph sizes for the measured panel.

use crate::ui::theme::{BOARD_PADDING, GLYPH_SCALE, MIN_SQUARE_SIZE, MOVE_DOT_SCALE};
use gpui::{Pixels, Size, px};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
    /// Zoom factor from gestures
    pub scale: f32,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>, scale: f32) -> Self {
        Self { panel_size, scale }
    }

    /// Square size that fits the panel at unit zoom, then zoomed
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        let fitted = (available_width.min(available_height) / 8.0).max(MIN_SQUARE_SIZE);
        fitted * self.scale
    }

    /// Font size for piece glyphs
    pub fn glyph_size(&self) -> f32 {
        self.square_size() * GLYPH_SCALE
    }

    pub fn move_dot_size(&self) -> f32 {
        self.square_size() * MOVE_DOT_SCALE
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(
            Size {
                width: px(560.0),
                height: px(600.0),
            },
            1.0,
        )
    }
}
