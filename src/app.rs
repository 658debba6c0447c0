//! Main application module.
//!
//! This module contains the `App` struct that runs the poll loop:
//! fetch, validate, evaluate, notify, sleep, repeat.

use crate::api::{HomeworkSource, ResponseValidator};
use crate::error::Result;
use crate::notify::{NotificationDispatcher, Notifier};
use crate::state::StatusTracker;
use std::time::Duration;
use tracing::{debug, error, info};

/// Leading text of the chat message sent when a poll cycle fails.
pub const FAILURE_MESSAGE_PREFIX: &str = "Сбой в работе программы";

/// The poll loop.
pub struct App<S, N> {
    /// Review API.
    source: S,
    /// Chat delivery.
    dispatcher: NotificationDispatcher<N>,
    /// Last verdict sent.
    tracker: StatusTracker,
    /// `from_date` for the next request.
    timestamp: i64,
    /// Pause between cycles.
    retry_period: Duration,
}

impl<S: HomeworkSource, N: Notifier> App<S, N> {
    /// Create a new poll loop starting at `timestamp` (epoch seconds).
    pub fn new(
        source: S,
        dispatcher: NotificationDispatcher<N>,
        retry_period: Duration,
        timestamp: i64,
    ) -> Self {
        Self {
            source,
            dispatcher,
            tracker: StatusTracker::new(),
            timestamp,
            retry_period,
        }
    }

    /// Current timestamp cursor.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Run the loop forever.
    pub async fn run(&mut self) {
        info!(
            from_date = self.timestamp,
            retry_period_secs = self.retry_period.as_secs(),
            "Starting homework status polling"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run a single cycle and return the message it sent, if any.
    ///
    /// Errors never escape: they are logged and turned into a chat message.
    pub async fn run_cycle(&mut self) -> Option<String> {
        let message = match self.poll().await {
            Ok(Some(message)) => {
                info!("Homework status changed");
                Some(message)
            }
            Ok(None) => {
                debug!("No homework status change");
                None
            }
            Err(e) if e.is_recoverable() => {
                error!(from_date = self.timestamp, "Poll cycle failed: {}", e);
                Some(failure_message(&e))
            }
            Err(e) => {
                error!(from_date = self.timestamp, "Unexpected failure in poll cycle: {}", e);
                Some(failure_message(&e))
            }
        };

        if let Some(message) = &message {
            self.dispatcher.dispatch(message).await;
        }

        message
    }

    async fn poll(&mut self) -> Result<Option<String>> {
        let response = self.source.fetch(self.timestamp).await?;
        let validated = ResponseValidator::validate(response)?;

        // The cursor moves as soon as the server time is known.
        self.timestamp = validated.current_date;

        self.tracker.evaluate(validated.homework.as_ref())
    }
}

fn failure_message(error: &crate::Error) -> String {
    format!("{}: {}", FAILURE_MESSAGE_PREFIX, error)
}
