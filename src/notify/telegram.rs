//! Telegram Bot API client.

use super::Notifier;
use crate::config::{BotConfig, build_http_client};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Sends plain text messages through the Telegram Bot API.
pub struct TelegramNotifier {
    bot_token: String,
    api_url: String,
    client: reqwest::Client,
}

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier.
    pub fn new(config: &BotConfig, bot_token: impl Into<String>) -> Result<Self> {
        let client = build_http_client(reqwest::Client::builder().timeout(config.timeout()))?;

        Ok(Self {
            bot_token: bot_token.into(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::delivery(format!("Telegram request failed: {}", e.without_url())))?;

        let status = response.status();
        let reply: Option<BotApiReply> = response.json().await.ok();

        match reply {
            Some(reply) if status.is_success() && reply.ok => {
                debug!("Telegram message sent");
                Ok(())
            }
            Some(reply) => Err(Error::delivery(format!(
                "Telegram API returned {}: {}",
                status,
                reply.description.unwrap_or_default()
            ))),
            None => Err(Error::delivery(format!(
                "Telegram API returned {} with an unreadable body",
                status
            ))),
        }
    }
}
