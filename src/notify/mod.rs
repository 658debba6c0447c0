//! Chat notifications.
//!
//! A [`Notifier`] talks to the messaging service; the
//! [`NotificationDispatcher`] wraps one and makes delivery best-effort.

mod telegram;

pub use telegram::TelegramNotifier;

use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, error};

/// A messaging service client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a text message to a chat.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// Delivers messages to the configured chat, swallowing delivery failures.
pub struct NotificationDispatcher<N> {
    notifier: N,
    chat_id: String,
}

impl<N: Notifier> NotificationDispatcher<N> {
    /// Create a dispatcher for a single chat.
    pub fn new(notifier: N, chat_id: impl Into<String>) -> Self {
        Self {
            notifier,
            chat_id: chat_id.into(),
        }
    }

    /// Send a message. Failures are logged and dropped.
    pub async fn dispatch(&self, message: &str) {
        match self.notifier.send_message(&self.chat_id, message).await {
            Ok(()) => debug!(chat_id = %self.chat_id, "Message delivered"),
            Err(e) => error!(chat_id = %self.chat_id, "Failed to deliver message: {}", e),
        }
    }
}
