//! Application settings: compiled-in defaults, an optional `settings.json`,
//! and an environment override for the move service endpoint.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

const SETTINGS_FILENAME: &str = "settings.json";
const ENDPOINT_ENV: &str = "CHESSBOARD_MOVE_SERVICE_URL";

pub const DEFAULT_MOVE_SERVICE_URL: &str = "http://127.0.0.1:5000/move";
const DEFAULT_REPLY_DELAY_MS: u64 = 300;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub move_service_url: String,
    /// Pause before the opponent request goes out
    pub reply_delay_ms: u64,
    /// HTTP timeout; unset waits forever
    pub request_timeout_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_service_url: DEFAULT_MOVE_SERVICE_URL.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            request_timeout_ms: None,
        }
    }
}

impl Settings {
    /// Defaults, overridden by the first settings file found, then by the environment
    pub fn load() -> Result<Self> {
        let mut settings = match settings_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("no settings file, using defaults");
                Self::default()
            }
        };

        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            settings.apply_endpoint_override(&url);
        }
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings = Self::from_json(&contents)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(contents)?;
        anyhow::ensure!(
            !settings.move_service_url.trim().is_empty(),
            "move_service_url must not be empty"
        );
        Ok(settings)
    }

    fn apply_endpoint_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.move_service_url = url.to_string();
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Next to the executable first, then the working directory
fn settings_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(SETTINGS_FILENAME));
    }
    if let Ok(dir) = std::env::current_dir() {
        paths.push(dir.join(SETTINGS_FILENAME));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.move_service_url, "http://127.0.0.1:5000/move");
        assert_eq!(settings.reply_delay(), Duration::from_millis(300));
        assert_eq!(settings.request_timeout(), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{"request_timeout_ms": 5000}"#).unwrap();
        assert_eq!(settings.move_service_url, DEFAULT_MOVE_SERVICE_URL);
        assert_eq!(settings.reply_delay_ms, 300);
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_json(
            r#"{"move_service_url": "http://engine.local/move", "reply_delay_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(settings.move_service_url, "http://engine.local/move");
        assert_eq!(settings.reply_delay(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_bad_files() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{"move_service_url": ""}"#).is_err());
        assert!(Settings::from_json(r#"{"reply_delay": 10}"#).is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let mut settings = Settings::default();
        settings.apply_endpoint_override("  ");
        assert_eq!(settings.move_service_url, DEFAULT_MOVE_SERVICE_URL);
        settings.apply_endpoint_override(" http://10.0.0.2:8000/move ");
        assert_eq!(settings.move_service_url, "http://10.0.0.2:8000/move");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::from_file(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
