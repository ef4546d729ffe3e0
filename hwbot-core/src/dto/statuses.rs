//! Review API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::cursor::Cursor;
use crate::domain::homework::SubmissionRecord;

/// Response of `GET /homework_statuses/`
///
/// Records are ordered newest first. `current_date` becomes the cursor of the
/// next poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworkStatuses {
    #[serde(default)]
    pub homeworks: Vec<SubmissionRecord>,
    pub current_date: Cursor,
}

impl HomeworkStatuses {
    /// The most recent record, if any
    pub fn latest(&self) -> Option<&SubmissionRecord> {
        self.homeworks.first()
    }

    pub fn next_cursor(&self) -> Cursor {
        self.current_date
    }
}
