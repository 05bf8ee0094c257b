//! Game-over modal shown after checkmate.

use gpui::{Entity, div, prelude::*, px, rgb, rgba};
use gpui_component::button::{Button, ButtonVariants};

use crate::models::{GameModel, GameOverNotice};
use crate::ui::theme::{BORDER_COLOR, MODAL_BG, OVERLAY_BG, TEXT_PRIMARY, TEXT_SECONDARY};

pub fn render_game_over_modal(notice: GameOverNotice, model: &Entity<GameModel>) -> impl IntoElement {
    let model_again = model.clone();
    let model_close = model.clone();

    let card = div()
        .w(px(320.0))
        .flex()
        .flex_col()
        .gap_3()
        .p_6()
        .bg(rgb(MODAL_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_lg()
        .child(
            div()
                .text_xl()
                .font_weight(gpui::FontWeight::BOLD)
                .text_color(rgb(TEXT_PRIMARY))
                .child("Checkmate"),
        )
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .child(format!("{} wins! Congratulations.", notice.winner.name())),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .child(
                    Button::new("play-again")
                        .label("Play again (vs computer)")
                        .primary()
                        .on_click(move |_, _, cx| {
                            model_again.update(cx, |game, cx| {
                                game.play_again();
                                cx.notify();
                            });
                        }),
                )
                .child(Button::new("close-modal").label("Close").on_click(
                    move |_, _, cx| {
                        model_close.update(cx, |game, cx| {
                            game.close_notice();
                            cx.notify();
                        });
                    },
                )),
        );

    div()
        .id("game-over-overlay")
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgba(OVERLAY_BG))
        .occlude()
        .child(card)
}
