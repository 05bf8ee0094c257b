//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use shakmaty::{Color as SColor, File, Rank, Role, Square};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Capitalized side name for status lines and the game-over dialog
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl From<SColor> for PieceColor {
    fn from(color: SColor) -> Self {
        match color {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    /// Unicode glyph for the piece. Both sides share the solid glyph set;
    /// the renderer picks the fill color.
    pub fn glyph(&self) -> &'static str {
        match self.kind {
            PieceKind::Pawn => "♟",
            PieceKind::Rook => "♜",
            PieceKind::Knight => "♞",
            PieceKind::Bishop => "♝",
            PieceKind::Queen => "♛",
            PieceKind::King => "♚",
        }
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: piece.color.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_round_trip_corners() {
        assert_eq!(to_square(0, 0), Square::from_ascii(b"a8").unwrap());
        assert_eq!(to_square(7, 7), Square::from_ascii(b"h1").unwrap());
        assert_eq!(to_square(6, 4), Square::from_ascii(b"e2").unwrap());
    }

    #[test]
    fn test_shakmaty_piece_conversion() {
        let piece = shakmaty_to_piece(shakmaty::Piece {
            color: SColor::Black,
            role: Role::Knight,
        });
        assert_eq!(piece.kind, PieceKind::Knight);
        assert_eq!(piece.color, PieceColor::Black);
        assert_eq!(piece.glyph(), "♞");
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite().name(), "White");
    }
}
