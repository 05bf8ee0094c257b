//! Opponent model - fetches replies from the move service for the remote side.
//!
//! Architecture:
//! - Each request waits out the reply delay on a GPUI timer
//! - The blocking HTTP call runs on its own OS thread
//! - A GPUI task polls for the result and feeds it to the [`GameModel`]
//!
//! Requests are never cancelled. A reply is played only if the board is on
//! the position it was requested for, and at most one request per position is
//! outstanding.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use gpui::{AsyncApp, Context, WeakEntity};
use tracing::{debug, warn};

use crate::models::game::{GameModel, OpponentRequest, ReplyOutcome};
use crate::models::move_service::{MoveRequest, MoveServiceClient, MoveServiceError};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct OpponentModel {
    client: MoveServiceClient,
    reply_delay: Duration,
    /// FENs with a request still outstanding
    pending: Vec<String>,
}

impl OpponentModel {
    pub fn new(client: MoveServiceClient, reply_delay: Duration) -> Self {
        Self {
            client,
            reply_delay,
            pending: Vec::new(),
        }
    }

    /// Whether a reply for the given position is still on its way
    pub fn is_thinking(&self, fen: &str) -> bool {
        self.pending.iter().any(|pending| pending == fen)
    }

    /// Mark `fen` as requested; false when a request for it is already out
    fn begin(&mut self, fen: &str) -> bool {
        if self.is_thinking(fen) {
            return false;
        }
        self.pending.push(fen.to_string());
        true
    }

    fn finish(&mut self, fen: &str) {
        self.pending.retain(|pending| pending != fen);
    }

    /// Ask the service for a move and apply it to `game` when it arrives
    pub fn request_move(
        &mut self,
        game: WeakEntity<GameModel>,
        request: OpponentRequest,
        cx: &mut Context<Self>,
    ) {
        if !self.begin(&request.fen) {
            debug!(fen = %request.fen, "reply already pending for position");
            return;
        }
        cx.notify();

        let client = self.client.clone();
        let delay = self.reply_delay;
        cx.spawn(async move |this: WeakEntity<OpponentModel>, cx: &mut AsyncApp| {
            cx.background_executor().timer(delay).await;

            let result = Self::fetch(client, &request, cx).await;
            match result {
                Ok(reply) => {
                    let applied = game.update(cx, |game, cx| {
                        let outcome = game.apply_opponent_reply(&request.fen, reply.as_deref());
                        if matches!(outcome, ReplyOutcome::Applied(_)) {
                            cx.notify();
                        }
                        outcome
                    });
                    if let Ok(outcome) = applied {
                        debug!(?outcome, "opponent reply handled");
                    }
                }
                Err(err) => warn!(%err, "no reply from move service"),
            }

            let _ = this.update(cx, |this, cx| {
                this.finish(&request.fen);
                cx.notify();
            });
        })
        .detach();
    }

    /// Run the blocking request on a worker thread and wait for it
    async fn fetch(
        client: MoveServiceClient,
        request: &OpponentRequest,
        cx: &mut AsyncApp,
    ) -> Result<Option<String>, MoveServiceError> {
        let body = MoveRequest {
            fen: request.fen.clone(),
            depth: request.depth,
        };
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(client.request_move(&body));
        });

        loop {
            cx.background_executor().timer(POLL_INTERVAL).await;
            match rx.try_recv() {
                Ok(result) => return result,
                Err(TryRecvError::Empty) => continue,
                // worker panicked; treat as no move
                Err(TryRecvError::Disconnected) => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    fn opponent() -> OpponentModel {
        let client = MoveServiceClient::new("http://127.0.0.1:9/move", None).unwrap();
        OpponentModel::new(client, Duration::ZERO)
    }

    #[test]
    fn test_one_pending_request_per_position() {
        let mut model = opponent();
        assert!(!model.is_thinking(AFTER_E4));

        assert!(model.begin(AFTER_E4));
        assert!(model.is_thinking(AFTER_E4));
        // redo back onto the same position while the first request is out
        assert!(!model.begin(AFTER_E4));

        model.finish(AFTER_E4);
        assert!(!model.is_thinking(AFTER_E4));
        assert!(model.begin(AFTER_E4));
    }
}
