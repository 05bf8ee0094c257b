//! Square rendering component.

use crate::ui::BoardLayout;
use crate::ui::components::render_piece;
use crate::ui::theme::{
    CHECK_SQUARE, LAST_MOVE_FROM, LAST_MOVE_TO, MOVE_DOT, SELECTED_SQUARE, square_color,
};
use crate::ui::view_models::CellView;
use gpui::{App, SharedString, div, prelude::*, px, rgb};

/// Render a single board square with its highlights and optional piece
pub fn render_square(
    cell: &CellView,
    layout: &BoardLayout,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    let square_size = layout.square_size();
    let dot_size = layout.move_dot_size();

    // Check outranks selection, which outranks the last move
    let background = if cell.in_check {
        rgb(CHECK_SQUARE)
    } else if cell.selected {
        rgb(SELECTED_SQUARE)
    } else if cell.last_move_to {
        rgb(LAST_MOVE_TO)
    } else if cell.last_move_from {
        rgb(LAST_MOVE_FROM)
    } else {
        square_color(cell.is_light)
    };

    let capture = cell.legal_destination && cell.piece.is_some();
    let quiet_move = cell.legal_destination && cell.piece.is_none();

    div()
        .id(SharedString::from(format!("square-{}", cell.square)))
        .relative()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(background)
        .cursor_pointer()
        .when(capture, |el| el.border_4().border_color(rgb(MOVE_DOT)))
        .when_some(cell.piece, |el, piece| {
            el.child(render_piece(piece, layout.glyph_size()))
        })
        .when(quiet_move, |el| {
            el.child(
                div()
                    .absolute()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .size(px(dot_size))
                            .rounded_full()
                            .bg(rgb(MOVE_DOT))
                            .opacity(0.6),
                    ),
            )
        })
        .on_click(move |_ev, _window, cx| on_click(cx))
}
