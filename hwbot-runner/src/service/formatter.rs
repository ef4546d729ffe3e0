//! Message formatter service
//!
//! Turns the most recent submission record into the text sent to the chat.

use hwbot_core::domain::homework::{HomeworkStatus, SubmissionRecord};
use hwbot_core::domain::message::StatusMessage;
use thiserror::Error;

/// Why a record could not be turned into a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// One or both of `homework_name` and `status` are absent
    #[error("malformed record: missing {}", .missing.join(", "))]
    MalformedRecord { missing: Vec<&'static str> },

    /// `status` is present but not one the bot can describe
    #[error("unknown status {status:?} for homework {homework_name:?}")]
    UnknownStatus {
        homework_name: String,
        status: String,
    },
}

/// Service trait for building status messages
pub trait MessageFormatter: Send + Sync {
    /// Formats a single submission record
    ///
    /// # Errors
    /// * `FormatError::MalformedRecord` - a required key is missing
    /// * `FormatError::UnknownStatus` - the status is outside the known set
    fn format(&self, record: &SubmissionRecord) -> Result<StatusMessage, FormatError>;
}

/// Standard implementation of MessageFormatter
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFormatter;

impl StandardFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl MessageFormatter for StandardFormatter {
    fn format(&self, record: &SubmissionRecord) -> Result<StatusMessage, FormatError> {
        let (homework_name, status) = match (&record.homework_name, &record.status) {
            (Some(name), Some(status)) => (name, status),
            (name, status) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("homework_name");
                }
                if status.is_none() {
                    missing.push("status");
                }
                return Err(FormatError::MalformedRecord { missing });
            }
        };

        let status = HomeworkStatus::parse(status).ok_or_else(|| FormatError::UnknownStatus {
            homework_name: homework_name.clone(),
            status: status.clone(),
        })?;

        Ok(StatusMessage::reviewed(homework_name, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, status: Option<&str>) -> SubmissionRecord {
        SubmissionRecord {
            homework_name: name.map(str::to_string),
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_approved_message() {
        let message = StandardFormatter::new()
            .format(&SubmissionRecord::new("Project 1", "approved"))
            .unwrap();

        assert!(message.as_str().contains("Project 1"));
        assert!(message.as_str().contains(HomeworkStatus::Approved.verdict()));
    }

    #[test]
    fn test_rejected_message() {
        let message = StandardFormatter::new()
            .format(&SubmissionRecord::new("Project 3", "rejected"))
            .unwrap();

        assert!(message.as_str().contains("Project 3"));
        assert!(message.as_str().contains(HomeworkStatus::Rejected.verdict()));
        assert!(!message.as_str().contains(HomeworkStatus::Approved.verdict()));
    }

    #[test]
    fn test_unknown_status() {
        let err = StandardFormatter::new()
            .format(&SubmissionRecord::new("Project 4", "reviewing"))
            .unwrap_err();

        assert_eq!(
            err,
            FormatError::UnknownStatus {
                homework_name: "Project 4".to_string(),
                status: "reviewing".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let err = StandardFormatter::new()
            .format(&record(Some("Project 2"), None))
            .unwrap_err();

        assert_eq!(
            err,
            FormatError::MalformedRecord {
                missing: vec!["status"]
            }
        );
    }

    #[test]
    fn test_missing_name_is_malformed() {
        // A known status alone must not be enough
        let err = StandardFormatter::new()
            .format(&record(None, Some("approved")))
            .unwrap_err();

        assert_eq!(
            err,
            FormatError::MalformedRecord {
                missing: vec!["homework_name"]
            }
        );
    }

    #[test]
    fn test_missing_both_keys() {
        let err = StandardFormatter::new()
            .format(&record(None, None))
            .unwrap_err();

        assert_eq!(err.to_string(), "malformed record: missing homework_name, status");
    }
}
