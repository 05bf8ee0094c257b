pub mod game;
pub mod move_service;
pub mod opponent;
pub mod view_scale;

pub use game::{ClickOutcome, Difficulty, GameModel, GameOverNotice, Mode, OpponentRequest};
pub use move_service::MoveServiceClient;
pub use opponent::OpponentModel;
pub use view_scale::ViewScale;
