//! Application setup and window creation.

use anyhow::Result;
use gpui::{App, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::info;

use crate::config::Settings;
use crate::models::{GameModel, MoveServiceClient, OpponentModel};
use crate::ui::views::{ChessBoardView, KEY_CONTEXT, ModeChoice, Redo, SelectMode, Undo};

fn bind_keys(cx: &mut App) {
    let context = Some(KEY_CONTEXT);
    cx.bind_keys([
        KeyBinding::new("cmd-z", Undo, context),
        KeyBinding::new("ctrl-z", Undo, context),
        KeyBinding::new("cmd-shift-z", Redo, context),
        KeyBinding::new("ctrl-y", Redo, context),
        KeyBinding::new("1", SelectMode { choice: ModeChoice::Local }, context),
        KeyBinding::new("2", SelectMode { choice: ModeChoice::Easy }, context),
        KeyBinding::new("3", SelectMode { choice: ModeChoice::Medium }, context),
        KeyBinding::new("4", SelectMode { choice: ModeChoice::Hard }, context),
    ]);
}

/// Initialize and run the chess application
pub fn run(cx: &mut App, settings: Settings, client: MoveServiceClient) -> Result<()> {
    gpui_component::init(cx);
    bind_keys(cx);

    info!(endpoint = client.endpoint(), "move service");
    let game = cx.new(|_| GameModel::new());
    let opponent = cx.new(|_| OpponentModel::new(client, settings.reply_delay()));

    let bounds = Bounds::centered(None, size(px(960.0), px(640.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(game, opponent, cx));
            window.focus(&view.focus_handle(cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
