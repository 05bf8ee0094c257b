//! Game record on top of the shakmaty rules engine.
//!
//! Holds the current position plus, for every played move, the position it
//! was played from, so moves can be taken back one at a time.
//!
//! This is a pure domain module with no GPUI dependencies.

use std::collections::HashSet;

use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{Chess, EnPassantMode, File, Move, Position, Role, Square};

use crate::domain::{CoordinateMove, Piece, PieceColor, shakmaty_to_piece};

/// Errors returned when the rules engine refuses a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No legal move connects the two squares
    #[error("no legal move from {from} to {to}")]
    Illegal { from: Square, to: Square },

    /// Notation that does not parse or does not apply to the position
    #[error("move `{notation}` is not playable: {reason}")]
    Notation { notation: String, reason: String },
}

/// A move as recorded in the game history
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: Square,
    /// Destination of the moving piece (the king's square for castling)
    pub to: Square,
    /// SAN without check suffix
    pub san: String,
    /// Whether this move gives check
    pub is_check: bool,
    /// Whether this move gives checkmate
    pub is_checkmate: bool,
}

impl PlayedMove {
    /// SAN with `+` or `#` appended
    pub fn display_san(&self) -> String {
        let mut text = self.san.clone();
        if self.is_checkmate {
            text.push('#');
        } else if self.is_check {
            text.push('+');
        }
        text
    }
}

#[derive(Clone, Debug)]
struct HistoryEntry {
    /// Position before the move was played
    before: Chess,
    played: PlayedMove,
}

/// The game being played: current position and linear move history
#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// A game at the standard starting position
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    /// A game starting from an arbitrary position
    #[cfg(test)]
    pub fn from_fen(fen: &str) -> Option<Self> {
        let parsed: Fen = fen.parse().ok()?;
        let position: Chess = parsed.into_position(shakmaty::CastlingMode::Standard).ok()?;
        Some(Self {
            position,
            history: Vec::new(),
        })
    }

    /// Back to the standard starting position with an empty history
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square).map(shakmaty_to_piece)
    }

    pub fn turn(&self) -> PieceColor {
        self.position.turn().into()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// Square of the side-to-move's king when it is in check
    pub fn checked_king(&self) -> Option<Square> {
        if self.position.is_check() {
            self.position.board().king_of(self.position.turn())
        } else {
            None
        }
    }

    /// Squares the piece on `from` can legally move to
    pub fn legal_destinations(&self, from: Square) -> HashSet<Square> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(move_endpoints)
            .filter(|(move_from, _)| *move_from == from)
            .map(|(_, move_to)| move_to)
            .collect()
    }

    /// Play the legal move from one square to another.
    ///
    /// Promotions use `promotion`, or a queen when none is given. The argument
    /// is ignored for moves that do not promote.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<PlayedMove, MoveError> {
        let wanted = promotion.unwrap_or(Role::Queen);
        let chosen = self
            .position
            .legal_moves()
            .into_iter()
            .find(|m| {
                move_endpoints(m) == Some((from, to))
                    && (!m.is_promotion() || m.promotion() == Some(wanted))
            })
            .ok_or(MoveError::Illegal { from, to })?;

        Ok(self.push(chosen, from, to))
    }

    pub fn play_coordinate(&mut self, m: &CoordinateMove) -> Result<PlayedMove, MoveError> {
        self.play(m.from, m.to, m.promotion)
    }

    /// Play a move given in SAN; a trailing `+` or `#` is accepted
    pub fn play_san(&mut self, notation: &str) -> Result<PlayedMove, MoveError> {
        let rejected = |reason: String| MoveError::Notation {
            notation: notation.to_string(),
            reason,
        };
        let san: SanPlus = notation.parse().map_err(|e| rejected(format!("{e}")))?;
        let m = san
            .san
            .to_move(&self.position)
            .map_err(|e| rejected(format!("{e}")))?;
        let (from, to) =
            move_endpoints(&m).ok_or_else(|| rejected("piece drops are not supported".into()))?;

        Ok(self.push(m, from, to))
    }

    /// Take back the last move, returning it
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let entry = self.history.pop()?;
        self.position = entry.before;
        Some(entry.played)
    }

    /// Played moves, oldest first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &PlayedMove> + '_ {
        self.history.iter().map(|entry| &entry.played)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn push(&mut self, m: Move, from: Square, to: Square) -> PlayedMove {
        let san = San::from_move(&self.position, m).to_string();
        let before = self.position.clone();
        self.position.play_unchecked(m);

        let played = PlayedMove {
            from,
            to,
            san,
            is_check: self.position.is_check(),
            is_checkmate: self.position.is_checkmate(),
        };
        self.history.push(HistoryEntry {
            before,
            played: played.clone(),
        });
        played
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Source and destination of a move as the user sees it.
///
/// Castling is expressed as the king moving to g1/g8 or c1/c8 rather than
/// onto its rook.
fn move_endpoints(m: &Move) -> Option<(Square, Square)> {
    match *m {
        Move::Normal { from, to, .. } => Some((from, to)),
        Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some((king, king_dest))
        }
        Move::Put { .. } => None,
    }
}
