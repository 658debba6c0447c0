//! Configuration management for the homework bot.

mod credentials;
mod settings;

pub use credentials::{Credentials, PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};
pub use settings::{ApiConfig, BotConfig, CONFIG_PATH_ENV, Config, PollConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "homework-bot", "homework-bot")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::config("Could not determine config directory"))
}

/// Build an HTTP client, reporting failures as configuration errors.
pub fn build_http_client(builder: reqwest::ClientBuilder) -> Result<reqwest::Client> {
    builder
        .build()
        .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_http_client() {
        let builder = reqwest::Client::builder().timeout(Duration::from_secs(5));
        assert!(build_http_client(builder).is_ok());
    }

    #[test]
    fn test_build_http_client_failure_is_config_error() {
        let builder = reqwest::Client::builder().user_agent("bad\nagent");
        let err = build_http_client(builder).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("HTTP client")));
    }
}
