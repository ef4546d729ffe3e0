//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single submission as reported by the review API
///
/// Both fields are optional on the wire so that a record with missing keys
/// still deserializes; deciding whether it is usable is up to the formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homework_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any other fields the API sends along (reviewer comment, dates, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmissionRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
            extra: Map::new(),
        }
    }
}

/// Review status values the bot knows how to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Rejected,
}

impl HomeworkStatus {
    /// Parses a wire status; `None` for anything outside the known set
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => {
                "The reviewer liked everything, you can move on to the next lesson."
            }
            Self::Rejected => "Unfortunately, the reviewer found errors in your work.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(HomeworkStatus::parse("approved"), Some(HomeworkStatus::Approved));
        assert_eq!(HomeworkStatus::parse("rejected"), Some(HomeworkStatus::Rejected));
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(HomeworkStatus::parse("reviewing"), None);
        assert_eq!(HomeworkStatus::parse("Approved"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
    }

    #[test]
    fn test_verdicts_differ() {
        assert_ne!(
            HomeworkStatus::Approved.verdict(),
            HomeworkStatus::Rejected.verdict()
        );
    }

    #[test]
    fn test_record_with_missing_keys_deserializes() {
        let record: SubmissionRecord =
            serde_json::from_str(r#"{"homework_name": "Project 2"}"#).unwrap();

        assert_eq!(record.homework_name.as_deref(), Some("Project 2"));
        assert!(record.status.is_none());
    }

    #[test]
    fn test_record_keeps_extra_fields() {
        let record: SubmissionRecord = serde_json::from_str(
            r#"{"homework_name": "Project 1", "status": "approved", "reviewer_comment": "ok", "id": 7}"#,
        )
        .unwrap();

        assert_eq!(record.status.as_deref(), Some("approved"));
        assert_eq!(record.extra.get("reviewer_comment"), Some(&Value::from("ok")));
        assert_eq!(record.extra.get("id"), Some(&Value::from(7)));
    }
}
