//! Game state model - the application layer for chess game state.
//!
//! Owns the game record, the square selection, the redo stack, the chosen
//! mode and the board zoom. Every operation here runs on the UI thread. An
//! opponent request remembers the FEN it was made for, so a late reply is only
//! played when the board is back on that exact position.

use std::collections::HashSet;

use shakmaty::Square;
use tracing::{debug, info, warn};

use crate::domain::{Game, MoveError, OpponentMove, PieceColor, PlayedMove};
use crate::models::ViewScale;

/// Side played by the move service in vs-remote mode
pub const REMOTE_SIDE: PieceColor = PieceColor::Black;

/// Difficulty tiers offered in the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth sent to the move service
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_depth(depth: u32) -> Option<Self> {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .into_iter()
            .find(|d| d.depth() == depth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Two players sharing the board
    Local,
    /// Human plays White, the move service plays Black
    VsRemote { depth: u32 },
}

impl Mode {
    pub fn vs_remote(difficulty: Difficulty) -> Self {
        Mode::VsRemote {
            depth: difficulty.depth(),
        }
    }

    fn status(self) -> String {
        match self {
            Mode::Local => "Local mode: play with a friend".to_string(),
            Mode::VsRemote { depth } => match Difficulty::from_depth(depth) {
                Some(difficulty) => format!("Vs computer ({})", difficulty.label()),
                None => format!("Vs computer (depth {depth})"),
            },
        }
    }
}

/// A selected square and where its piece may go.
///
/// Destinations only exist as part of a selection and are computed once, when
/// the square is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    square: Square,
    destinations: HashSet<Square>,
}

impl Selection {
    pub fn square(&self) -> Square {
        self.square
    }

    pub fn destinations(&self) -> &HashSet<Square> {
        &self.destinations
    }
}

/// Squares of the most recent move, for highlighting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

impl From<&PlayedMove> for LastMove {
    fn from(played: &PlayedMove) -> Self {
        Self {
            from: played.from,
            to: played.to,
        }
    }
}

/// Shown once when a move ends the game by checkmate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverNotice {
    pub winner: PieceColor,
}

/// Everything the move service needs to answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpponentRequest {
    /// Position the reply is meant for
    pub fen: String,
    pub depth: u32,
}

/// Result of a click on a board square
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened
    Ignored,
    Selected,
    Deselected,
    /// Move attempt refused by the rules engine; selection cleared
    Rejected,
    /// Move played; `opponent` is set when the move service should reply
    Moved { opponent: Option<OpponentRequest> },
}

/// Result of feeding a move service reply back into the game
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    Applied(PlayedMove),
    /// The reply carried no usable move
    NoMove,
    /// The rules engine refused the move
    Rejected(MoveError),
    /// The board is no longer on the requested position
    Stale,
}

/// The main game model containing all chess game state
pub struct GameModel {
    game: Game,
    mode: Option<Mode>,
    selection: Option<Selection>,
    last_move: Option<LastMove>,
    /// SAN of undone moves, most recently undone last
    redo_stack: Vec<String>,
    notice: Option<GameOverNotice>,
    status: String,
    /// Board zoom, driven by gestures
    pub view_scale: ViewScale,
}

impl GameModel {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            mode: None,
            selection: None,
            last_move: None,
            redo_stack: Vec::new(),
            notice: None,
            status: "Choose a game mode".to_string(),
            view_scale: ViewScale::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn notice(&self) -> Option<GameOverNotice> {
        self.notice
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn can_undo(&self) -> bool {
        self.game.history_len() > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Enter a mode with a fresh board
    pub fn start(&mut self, mode: Mode) {
        self.game.reset();
        self.mode = Some(mode);
        self.selection = None;
        self.last_move = None;
        self.redo_stack.clear();
        self.notice = None;
        self.status = mode.status();
        info!(?mode, "started new game");
    }

    /// Handle a click on a board square
    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        if self.notice.is_some() {
            return ClickOutcome::Ignored;
        }

        let Some(selected) = self.selection.as_ref().map(Selection::square) else {
            return self.select(square);
        };

        if selected == square {
            self.selection = None;
            return ClickOutcome::Deselected;
        }

        // Any second click ends the selection, legal or not
        self.selection = None;
        match self.game.play(selected, square, None) {
            Ok(played) => {
                debug!(san = %played.san, "player move");
                self.record_move(&played);
                ClickOutcome::Moved {
                    opponent: self.opponent_request(),
                }
            }
            Err(err) => {
                debug!(%err, "move rejected");
                ClickOutcome::Rejected
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let Some(piece) = self.game.piece_at(square) else {
            return ClickOutcome::Ignored;
        };
        if matches!(self.mode, Some(Mode::VsRemote { .. })) && piece.color == REMOTE_SIDE {
            return ClickOutcome::Ignored;
        }

        self.selection = Some(Selection {
            square,
            destinations: self.game.legal_destinations(square),
        });
        ClickOutcome::Selected
    }

    /// The request to send if the move service is now to move
    pub fn opponent_request(&self) -> Option<OpponentRequest> {
        let Some(Mode::VsRemote { depth }) = self.mode else {
            return None;
        };
        if self.game.turn() != REMOTE_SIDE || self.game.is_checkmate() || self.game.is_stalemate()
        {
            return None;
        }

        Some(OpponentRequest {
            fen: self.game.fen(),
            depth,
        })
    }

    /// Apply a move service reply to the position it was requested for.
    ///
    /// `fen` is the request's position and `reply` the raw move string, `None`
    /// when the service sent none. Undoing and redoing back to the requested
    /// position keeps the reply valid.
    pub fn apply_opponent_reply(&mut self, fen: &str, reply: Option<&str>) -> ReplyOutcome {
        let current = self.game.fen();
        if fen != current {
            debug!(requested = fen, %current, "dropping stale opponent reply");
            return ReplyOutcome::Stale;
        }
        let Some(text) = reply else {
            return ReplyOutcome::NoMove;
        };

        let result = match OpponentMove::parse(text) {
            OpponentMove::Coordinate(m) => {
                debug!(reply = %m, "coordinate reply");
                self.game.play_coordinate(&m)
            }
            OpponentMove::Notation(notation) => self.game.play_san(&notation),
            OpponentMove::Malformed => {
                warn!(reply = text, "malformed opponent move");
                return ReplyOutcome::NoMove;
            }
        };

        match result {
            Ok(played) => {
                debug!(san = %played.san, "opponent move");
                self.selection = None;
                self.record_move(&played);
                ReplyOutcome::Applied(played)
            }
            Err(err) => {
                warn!(%err, "opponent move rejected");
                ReplyOutcome::Rejected(err)
            }
        }
    }

    /// Take back one move, remembering it for redo
    pub fn undo(&mut self) -> Option<PlayedMove> {
        self.notice = None;
        let undone = self.game.undo()?;
        self.redo_stack.push(undone.san.clone());
        self.selection = None;
        self.last_move = None;
        Some(undone)
    }

    /// Replay the most recently undone move.
    ///
    /// Callers check [`Self::opponent_request`] afterwards: redo can land on the
    /// remote side's turn.
    pub fn redo(&mut self) -> Option<PlayedMove> {
        let san = self.redo_stack.pop()?;
        match self.game.play_san(&san) {
            Ok(played) => {
                self.selection = None;
                self.last_move = Some(LastMove::from(&played));
                Some(played)
            }
            Err(err) => {
                warn!(%err, "redo move no longer applies");
                None
            }
        }
    }

    /// Dismiss the game-over notice and keep the final position
    pub fn close_notice(&mut self) {
        self.notice = None;
        self.selection = None;
    }

    /// Dismiss the game-over notice and start a new game against the service
    pub fn play_again(&mut self) {
        self.notice = None;
        self.start(Mode::vs_remote(Difficulty::Medium));
    }

    /// Bookkeeping shared by every move made through normal play
    fn record_move(&mut self, played: &PlayedMove) {
        self.last_move = Some(LastMove::from(played));
        self.redo_stack.clear();

        if played.is_checkmate {
            let winner = self.game.turn().opposite();
            info!(winner = winner.name(), "checkmate");
            self.notice = Some(GameOverNotice { winner });
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}
