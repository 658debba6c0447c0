//! Shape checks for decoded review API responses.

use crate::error::{Error, Result};
use serde_json::Value;

/// A response that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    /// The most recent homework record, if any was returned.
    pub homework: Option<Value>,
    /// Server time to use as the next `from_date`.
    pub current_date: i64,
}

/// Validates decoded review API responses.
pub struct ResponseValidator;

impl ResponseValidator {
    /// Check the response shape and pick the most recent homework.
    ///
    /// Only the first entry of `homeworks` is kept; the API lists the newest
    /// submission first.
    pub fn validate(response: Value) -> Result<ValidatedResponse> {
        let Value::Object(mut fields) = response else {
            return Err(Error::type_mismatch("response is not an object"));
        };

        let homeworks = match fields.remove("homeworks") {
            Some(Value::Array(items)) => items,
            _ => return Err(Error::type_mismatch("\"homeworks\" is not a list")),
        };

        let current_date = match fields.get("current_date") {
            None | Some(Value::Null) => return Err(Error::MissingField("current_date")),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| Error::type_mismatch("\"current_date\" is not an integer"))?,
        };

        Ok(ValidatedResponse {
            homework: homeworks.into_iter().next(),
            current_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_homework_is_picked() {
        let validated = ResponseValidator::validate(json!({
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"}
            ],
            "current_date": 1700000000
        }))
        .unwrap();

        assert_eq!(validated.current_date, 1700000000);
        assert_eq!(
            validated.homework,
            Some(json!({"homework_name": "hw2", "status": "reviewing"}))
        );
    }

    #[test]
    fn test_empty_homeworks() {
        let validated = ResponseValidator::validate(json!({
            "homeworks": [],
            "current_date": 1700000100
        }))
        .unwrap();

        assert_eq!(validated.homework, None);
        assert_eq!(validated.current_date, 1700000100);
    }

    #[test]
    fn test_not_an_object() {
        let err = ResponseValidator::validate(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let err = ResponseValidator::validate(json!({
            "homeworks": {"homework_name": "hw1"},
            "current_date": 1
        }))
        .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));

        let err = ResponseValidator::validate(json!({"current_date": 1})).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }

    #[test]
    fn test_missing_current_date() {
        let err = ResponseValidator::validate(json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, Error::MissingField("current_date")));

        let err = ResponseValidator::validate(json!({"homeworks": [], "current_date": null}))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("current_date")));
    }

    #[test]
    fn test_current_date_not_integer() {
        for bad in [json!("1700000000"), json!(1.5), json!(true)] {
            let err = ResponseValidator::validate(json!({
                "homeworks": [],
                "current_date": bad
            }))
            .unwrap_err();
            assert!(matches!(err, Error::TypeMismatch(_)));
        }
    }
}
