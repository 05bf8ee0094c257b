//! Pure chess domain: piece types, the game record on top of shakmaty, and
//! coordinate move notation. No GPUI dependencies.

pub mod chess;
pub mod coordinate;
pub mod game;

pub use chess::{Piece, PieceColor, PieceKind, shakmaty_to_piece, to_square};
pub use coordinate::{CoordinateMove, OpponentMove};
pub use game::{Game, MoveError, PlayedMove};
