//! Piece rendering component.

use crate::domain::{Piece, PieceColor};
use crate::ui::theme::{BLACK_PIECE, WHITE_PIECE};
use gpui::{div, prelude::*, px, rgb};

/// Render a chess piece glyph centered in its container
pub fn render_piece(piece: Piece, glyph_size: f32) -> impl IntoElement {
    let color = match piece.color {
        PieceColor::White => WHITE_PIECE,
        PieceColor::Black => BLACK_PIECE,
    };

    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(glyph_size))
        .line_height(px(glyph_size))
        .text_color(rgb(color))
        .child(piece.glyph())
}
