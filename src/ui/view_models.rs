//! View models for rendering the board and the move list.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use shakmaty::Square;

use crate::domain::Piece;

/// Everything needed to draw one board square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub square: Square,
    pub is_light: bool,
    pub piece: Option<Piece>,
    pub selected: bool,
    pub last_move_from: bool,
    pub last_move_to: bool,
    /// The selected piece may move here
    pub legal_destination: bool,
    /// King of the side to move, currently in check
    pub in_check: bool,
}

/// One numbered line of the move list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRow {
    pub move_num: usize,
    pub white: String,
    /// Empty until Black has replied
    pub black: Option<String>,
}
