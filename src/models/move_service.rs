//! HTTP client for the remote move service.
//!
//! The service takes `{"fen": ..., "depth": ...}` and answers with
//! `{"move": "e7e5"}`. Calls block, so they run off the UI thread.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub fen: String,
    pub depth: u32,
}

#[derive(Debug, Error)]
pub enum MoveServiceError {
    #[error("move service request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("move service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("move service reply is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Pull the move out of a reply body; anything but a string means no move
pub fn extract_move(body: &Value) -> Option<String> {
    match body.get("move") {
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct MoveServiceClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl MoveServiceClient {
    /// `timeout` of `None` waits for the service indefinitely
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the position and return the service's move, if it sent one
    pub fn request_move(&self, request: &MoveRequest) -> Result<Option<String>, MoveServiceError> {
        debug!(endpoint = %self.endpoint, depth = request.depth, fen = %request.fen, "requesting move");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(MoveServiceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoveServiceError::Status(status));
        }

        let body: Value = response.json().map_err(MoveServiceError::Decode)?;
        Ok(extract_move(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = MoveRequest {
            fen: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".to_string(),
            depth: 3,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fen": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
                "depth": 3,
            })
        );
    }

    #[test]
    fn test_extract_move() {
        assert_eq!(extract_move(&json!({"move": "e7e5"})), Some("e7e5".to_string()));
        assert_eq!(extract_move(&json!({"move": "Nf6", "score": 12})), Some("Nf6".to_string()));
    }

    #[test]
    fn test_extract_move_without_string() {
        assert_eq!(extract_move(&json!({})), None);
        assert_eq!(extract_move(&json!({"move": null})), None);
        assert_eq!(extract_move(&json!({"move": 42})), None);
        assert_eq!(extract_move(&json!({"move": ["e7e5"]})), None);
        assert_eq!(extract_move(&json!("e7e5")), None);
    }
}
