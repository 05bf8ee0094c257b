mod board_view;
mod controls;
mod modal;
mod move_list;

pub use board_view::{ChessBoardView, KEY_CONTEXT, ModeChoice, Redo, SelectMode, Undo};
pub use controls::render_controls;
pub use modal::render_game_over_modal;
pub use move_list::render_move_list_panel;
