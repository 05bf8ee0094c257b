//! Move list panel - numbered move pairs with undo/redo controls.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};

use crate::models::{GameModel, OpponentModel};
use crate::ui::display::move_rows;
use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, MOVE_NUMBER, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::view_models::MoveRow;
use crate::ui::views::board_view::{redo_move, undo_move};

const NAV_BUTTON_BG: u32 = 0x3a3a3a;
const NAV_BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const NAV_BUTTON_DISABLED: u32 = 0x555555;
const LATEST_MOVE_BG: u32 = 0x4a6da7;

/// Render the move list panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(
    model: &Entity<GameModel>,
    opponent: &Entity<OpponentModel>,
    cx: &App,
) -> Div {
    let game = model.read(cx);
    let rows = move_rows(game.game());
    let can_undo = game.can_undo();
    let can_redo = game.can_redo();

    let model_undo = model.clone();
    let model_redo = model.clone();
    let opponent = opponent.clone();

    let moves_content = if rows.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        let last_row = rows.len() - 1;
        div().flex().flex_col().gap_1().children(
            rows.into_iter()
                .enumerate()
                .map(|(i, row)| render_move_row(row, i == last_row)),
        )
    };

    div()
        .flex_1()
        .min_h_0()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_nav_button("Undo", can_undo, move |cx| {
                    undo_move(&model_undo, cx)
                }))
                .child(render_nav_button("Redo", can_redo, move |cx| {
                    redo_move(&model_redo, &opponent, cx)
                })),
        )
}

/// One numbered row; the latest move is highlighted
fn render_move_row(row: MoveRow, is_latest_row: bool) -> impl IntoElement {
    let white_is_latest = is_latest_row && row.black.is_none();
    let black_is_latest = is_latest_row && row.black.is_some();

    div()
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .w(px(28.0))
                .text_color(rgb(MOVE_NUMBER))
                .child(format!("{}.", row.move_num)),
        )
        .child(render_move_cell(row.white, white_is_latest))
        .child(render_move_cell(row.black.unwrap_or_default(), black_is_latest))
}

fn render_move_cell(san: String, is_latest: bool) -> impl IntoElement {
    div()
        .flex_1()
        .px_1()
        .rounded(px(3.0))
        .text_color(rgb(TEXT_PRIMARY))
        .when(is_latest, |el| el.bg(rgb(LATEST_MOVE_BG)))
        .child(san)
}

/// Render a navigation button (undo/redo)
fn render_nav_button(
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("nav-{}", label)))
        .px_4()
        .py_2()
        .rounded(px(4.0))
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(NAV_BUTTON_DISABLED)
        })
        .font_weight(gpui::FontWeight::BOLD)
        .when(enabled, |el| {
            el.bg(rgb(NAV_BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(NAV_BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(0x2a2a2a)))
        .child(label)
}
