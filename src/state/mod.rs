//! Homework review state.
//!
//! Typed views of the homework records returned by the review API, the
//! fixed verdict table and the tracker that remembers the last verdict
//! sent to the chat.

mod tracker;

pub use tracker::StatusTracker;

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Review outcome of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Accepted by the reviewer.
    Approved,
    /// Taken for review.
    Reviewing,
    /// Returned with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses.
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire name used by the review API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnexpectedStatus(s.to_string()))
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent homework submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Name of the submitted work.
    pub name: String,
    /// Current review status.
    pub status: HomeworkStatus,
}

impl Homework {
    /// Build a homework from a raw record of the API response.
    ///
    /// `homework_name` is checked before `status`; a `null` value counts as
    /// absent.
    pub fn from_record(record: &Value) -> Result<Self> {
        let fields = record
            .as_object()
            .ok_or_else(|| Error::type_mismatch("homework record is not an object"))?;

        let name = required_str(fields, "homework_name")?;
        let status: HomeworkStatus = required_str(fields, "status")?.parse()?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

fn required_str<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(Error::MissingField(key)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| Error::type_mismatch(format!("\"{}\" is not a string", key))),
    }
}
