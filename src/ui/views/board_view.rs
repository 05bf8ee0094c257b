//! Chess board view - the main board with click-to-move, gesture zoom and
//! the side panel.

use gpui::{
    Action, App, Context, Entity, FocusHandle, Focusable, Pixels, ScrollWheelEvent, Size,
    Subscription, TouchPhase, Window, actions, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use schemars::JsonSchema;
use serde::Deserialize;
use shakmaty::Square;
use tracing::debug;

use crate::models::{ClickOutcome, Difficulty, GameModel, Mode, OpponentModel, OpponentRequest};
use crate::ui::BoardLayout;
use crate::ui::components::render_square;
use crate::ui::display::board_cells;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::{render_controls, render_game_over_modal, render_move_list_panel};

/// Key context for the board's bindings
pub const KEY_CONTEXT: &str = "ChessBoard";

/// Line height used to turn line-based wheel deltas into pixels
const WHEEL_LINE_HEIGHT: f32 = 20.0;

/// Finger spread a trackpad zoom gesture is measured against
const TRACKPAD_PINCH_SPAN: f32 = 400.0;

actions!(chessboard, [Undo, Redo]);

/// Mode buttons, also bound to keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum ModeChoice {
    Local,
    Easy,
    Medium,
    Hard,
}

impl ModeChoice {
    pub const ALL: [ModeChoice; 4] = [
        ModeChoice::Local,
        ModeChoice::Easy,
        ModeChoice::Medium,
        ModeChoice::Hard,
    ];

    pub fn mode(self) -> Mode {
        match self {
            ModeChoice::Local => Mode::Local,
            ModeChoice::Easy => Mode::vs_remote(Difficulty::Easy),
            ModeChoice::Medium => Mode::vs_remote(Difficulty::Medium),
            ModeChoice::Hard => Mode::vs_remote(Difficulty::Hard),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModeChoice::Local => "Local",
            ModeChoice::Easy => "Easy",
            ModeChoice::Medium => "Medium",
            ModeChoice::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, JsonSchema, Action)]
#[action(namespace = chessboard)]
pub struct SelectMode {
    pub choice: ModeChoice,
}

/// Handle a click on `square`, asking the move service to reply when it is its turn
pub fn click_square(
    game: &Entity<GameModel>,
    opponent: &Entity<OpponentModel>,
    square: Square,
    cx: &mut App,
) {
    let outcome = game.update(cx, |game, cx| {
        let outcome = game.click_square(square);
        if outcome != ClickOutcome::Ignored {
            cx.notify();
        }
        outcome
    });

    if let ClickOutcome::Moved {
        opponent: Some(request),
    } = outcome
    {
        request_opponent(game, opponent, request, cx);
    }
}

fn request_opponent(
    game: &Entity<GameModel>,
    opponent: &Entity<OpponentModel>,
    request: OpponentRequest,
    cx: &mut App,
) {
    let weak_game = game.downgrade();
    opponent.update(cx, |opponent, cx| {
        opponent.request_move(weak_game, request, cx);
    });
}

pub fn undo_move(game: &Entity<GameModel>, cx: &mut App) {
    game.update(cx, |game, cx| {
        if let Some(undone) = game.undo() {
            debug!(san = %undone.san, "undo");
            cx.notify();
        }
    });
}

/// Replay an undone move; the move service answers if it is now its turn
pub fn redo_move(game: &Entity<GameModel>, opponent: &Entity<OpponentModel>, cx: &mut App) {
    let request = game.update(cx, |game, cx| {
        let redone = game.redo()?;
        debug!(san = %redone.san, "redo");
        cx.notify();
        game.opponent_request()
    });

    if let Some(request) = request {
        request_opponent(game, opponent, request, cx);
    }
}

pub fn start_mode(game: &Entity<GameModel>, mode: Mode, cx: &mut App) {
    game.update(cx, |game, cx| {
        game.start(mode);
        cx.notify();
    });
}

/// The main chess board view that observes the game and the opponent
pub struct ChessBoardView {
    game: Entity<GameModel>,
    opponent: Entity<OpponentModel>,
    focus_handle: FocusHandle,
    /// Measured size of the board panel
    panel_size: Size<Pixels>,
    /// Current spread of an ongoing trackpad zoom gesture
    pinch_span: f32,
    _subscriptions: Vec<Subscription>,
}

impl ChessBoardView {
    pub fn new(
        game: Entity<GameModel>,
        opponent: Entity<OpponentModel>,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscriptions = vec![
            cx.observe(&game, |_, _, cx| cx.notify()),
            cx.observe(&opponent, |_, _, cx| cx.notify()),
        ];
        Self {
            game,
            opponent,
            focus_handle: cx.focus_handle(),
            panel_size: BoardLayout::default().panel_size,
            pinch_span: TRACKPAD_PINCH_SPAN,
            _subscriptions,
        }
    }

    fn undo(&mut self, _: &Undo, _window: &mut Window, cx: &mut Context<Self>) {
        undo_move(&self.game, cx);
    }

    fn redo(&mut self, _: &Redo, _window: &mut Window, cx: &mut Context<Self>) {
        redo_move(&self.game, &self.opponent, cx);
    }

    fn select_mode(&mut self, action: &SelectMode, _window: &mut Window, cx: &mut Context<Self>) {
        start_mode(&self.game, action.choice.mode(), cx);
    }

    /// Ctrl/Cmd + scroll zooms the board.
    ///
    /// A trackpad gesture started with the modifier held is treated as a pinch
    /// for its whole duration; a plain wheel zooms step by step.
    fn zoom(&mut self, ev: &ScrollWheelEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let modifier_held = ev.modifiers.control || ev.modifiers.platform;
        let delta_y: f32 = ev.delta.pixel_delta(px(WHEEL_LINE_HEIGHT)).y.into();
        let phase = ev.touch_phase;
        let pinch_span = &mut self.pinch_span;

        let consumed = self.game.update(cx, |game, cx| {
            let scale = &mut game.view_scale;
            let consumed = match phase {
                TouchPhase::Started if modifier_held => {
                    *pinch_span = TRACKPAD_PINCH_SPAN;
                    scale.begin_pinch(*pinch_span);
                    true
                }
                TouchPhase::Moved if scale.is_pinching() => {
                    *pinch_span = (*pinch_span - delta_y).max(1.0);
                    scale.update_pinch(*pinch_span);
                    true
                }
                TouchPhase::Ended if scale.is_pinching() => {
                    scale.end_pinch();
                    true
                }
                _ => scale.apply_wheel(delta_y, modifier_held),
            };
            if consumed {
                cx.notify();
            }
            consumed
        });
        if consumed {
            cx.stop_propagation();
        }
    }
}

impl Focusable for ChessBoardView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity();
        let game = self.game.read(cx);
        let notice = game.notice();

        let layout = BoardLayout::new(self.panel_size, game.view_scale.get());
        let board_total_size = layout.board_total_size();
        let cells = board_cells(game);

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(cells.chunks(8).map(|rank| {
                div().flex().flex_shrink_0().children(rank.iter().map(|cell| {
                    let game = self.game.clone();
                    let opponent = self.opponent.clone();
                    let square = cell.square;
                    render_square(cell, &layout, move |cx| {
                        click_square(&game, &opponent, square, cx)
                    })
                }))
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .on_scroll_wheel(cx.listener(Self::zoom));

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view.update(cx, |view, cx| {
                    if view.panel_size != bounds.size {
                        view.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let side_panel = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .gap_3()
            .child(render_controls(&self.game, &self.opponent, cx))
            .child(render_move_list_panel(&self.game, &self.opponent, cx));

        // Main resizable layout
        div()
            .id("chessboard")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::undo))
            .on_action(cx.listener(Self::redo))
            .on_action(cx.listener(Self::select_mode))
            .relative()
            .size_full()
            .child(
                h_resizable("chess-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1400.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(220.)..Pixels::MAX)
                            .child(side_panel),
                    ),
            )
            .when_some(notice, |el, notice| {
                el.child(render_game_over_modal(notice, &self.game))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_choices_map_to_depths() {
        assert_eq!(ModeChoice::Local.mode(), Mode::Local);
        assert_eq!(ModeChoice::Easy.mode(), Mode::VsRemote { depth: 1 });
        assert_eq!(ModeChoice::Medium.mode(), Mode::VsRemote { depth: 3 });
        assert_eq!(ModeChoice::Hard.mode(), Mode::VsRemote { depth: 5 });
    }

    #[test]
    fn test_select_mode_from_json() {
        let action: SelectMode = serde_json::from_str(r#"{"choice": "Hard"}"#).unwrap();
        assert_eq!(action.choice, ModeChoice::Hard);
    }
}
