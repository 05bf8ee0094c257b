//! Mode controls - game mode buttons, status line and the thinking indicator.

use gpui::{App, Entity, div, prelude::*, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::models::{GameModel, OpponentModel};
use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, TEXT_PRIMARY, TEXT_SECONDARY, THINKING};
use crate::ui::views::board_view::{ModeChoice, start_mode};

/// Render the mode controls for the game and its remote opponent
pub fn render_controls(
    game_model: &Entity<GameModel>,
    opponent_model: &Entity<OpponentModel>,
    cx: &App,
) -> impl IntoElement {
    let game = game_model.read(cx);
    let current_mode = game.mode();
    let status = game.status().to_string();
    let thinking = opponent_model.read(cx).is_thinking(&game.game().fen());

    let buttons = ModeChoice::ALL.into_iter().map(|choice| {
        let game_model = game_model.clone();
        let mode = choice.mode();
        Button::new(choice.label())
            .label(choice.label())
            .compact()
            .when(current_mode == Some(mode), |b| b.primary())
            .on_click(move |_, _, cx| start_mode(&game_model, mode, cx))
    });

    div()
        .flex_shrink_0()
        .flex()
        .flex_col()
        .gap_2()
        .p_4()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_color(rgb(TEXT_PRIMARY))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child("Game mode"),
                )
                .when(thinking, |el| {
                    el.child(
                        div()
                            .text_xs()
                            .text_color(rgb(THINKING))
                            .child("Thinking..."),
                    )
                }),
        )
        .child(div().flex().flex_wrap().gap_2().children(buttons))
        .child(
            div()
                .text_sm()
                .text_color(rgb(TEXT_SECONDARY))
                .child(status),
        )
}
