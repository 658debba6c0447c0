//! Verdict change detection.

use super::{Homework, HomeworkStatus};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Remembers the last verdict sent to the chat and decides whether a new
/// homework record deserves a notification.
#[derive(Debug, Default, Clone)]
pub struct StatusTracker {
    last_verdict: Option<&'static str>,
}

impl StatusTracker {
    /// Create a tracker with no verdict seen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last verdict a message was produced for.
    pub fn last_verdict(&self) -> Option<&'static str> {
        self.last_verdict
    }

    /// Evaluate the most recent homework record.
    ///
    /// Returns `Ok(None)` when there is no record or when its verdict matches
    /// the stored one. Otherwise stores the new verdict and returns the chat
    /// message.
    pub fn evaluate(&mut self, record: Option<&Value>) -> Result<Option<String>> {
        let Some(record) = record else {
            return Ok(None);
        };

        let homework = Homework::from_record(record)?;
        Ok(self.observe(&homework))
    }

    /// Record an already parsed homework.
    pub fn observe(&mut self, homework: &Homework) -> Option<String> {
        let verdict = homework.status.verdict();
        if self.last_verdict == Some(verdict) {
            debug!(homework = %homework.name, status = %homework.status, "Verdict unchanged");
            return None;
        }

        self.last_verdict = Some(verdict);
        Some(status_message(&homework.name, homework.status))
    }
}

/// Chat message announcing a status change.
pub fn status_message(homework_name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_no_record() {
        let mut tracker = StatusTracker::new();
        assert_eq!(tracker.evaluate(None).unwrap(), None);
        assert_eq!(tracker.last_verdict(), None);
    }

    #[test]
    fn test_approved_message() {
        let mut tracker = StatusTracker::new();
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            tracker.evaluate(Some(&record)).unwrap().as_deref(),
            Some("Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!")
        );
        assert_eq!(
            tracker.last_verdict(),
            Some(HomeworkStatus::Approved.verdict())
        );
    }

    #[test]
    fn test_same_status_notifies_once() {
        let mut tracker = StatusTracker::new();
        let record = json!({"homework_name": "hw1", "status": "reviewing"});
        assert!(tracker.evaluate(Some(&record)).unwrap().is_some());
        assert_eq!(tracker.evaluate(Some(&record)).unwrap(), None);
        assert_eq!(tracker.evaluate(Some(&record)).unwrap(), None);
    }

    #[test]
    fn test_status_change_notifies_again() {
        let mut tracker = StatusTracker::new();
        let reviewing = json!({"homework_name": "hw1", "status": "reviewing"});
        let rejected = json!({"homework_name": "hw1", "status": "rejected"});

        let first = tracker.evaluate(Some(&reviewing)).unwrap();
        let second = tracker.evaluate(Some(&rejected)).unwrap();

        assert_eq!(
            first.as_deref(),
            Some("Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.")
        );
        assert_eq!(
            second.as_deref(),
            Some("Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания.")
        );
    }

    #[test]
    fn test_invalid_record_keeps_last_verdict() {
        let mut tracker = StatusTracker::new();
        let record = json!({"homework_name": "hw1", "status": "approved"});
        tracker.evaluate(Some(&record)).unwrap();

        let err = tracker
            .evaluate(Some(&json!({"homework_name": "hw1", "status": "graded"})))
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus(_)));
        assert_eq!(
            tracker.last_verdict(),
            Some(HomeworkStatus::Approved.verdict())
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut tracker = StatusTracker::new();
        let err = tracker
            .evaluate(Some(&json!({"status": "approved"})))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("homework_name")));

        let err = tracker
            .evaluate(Some(&json!({"homework_name": "hw1"})))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("status")));
    }
}
