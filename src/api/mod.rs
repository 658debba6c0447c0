//! Review API integration.
//!
//! This module fetches homework statuses over HTTP and validates the
//! shape of the decoded responses.

mod client;
mod validator;

pub use client::{HomeworkSource, PracticumClient, PracticumClientBuilder};
pub use validator::{ResponseValidator, ValidatedResponse};

#[cfg(test)]
pub use client::MockHomeworkSource;
