//! # Homework Bot
//!
//! Polls the Practicum homework review API and relays review status
//! changes of the latest submission to a Telegram chat.
//!
//! ## Architecture
//!
//! - **App**: The poll loop and its error containment
//! - **API**: Review API client and response validation
//! - **State**: Verdict table and change detection
//! - **Notify**: Telegram delivery
//! - **Config**: Credentials and tunables

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

pub use app::App;
pub use config::{Config, Credentials};
pub use error::{Error, Result};
