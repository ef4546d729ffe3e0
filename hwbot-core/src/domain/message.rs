//! Status message domain type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::homework::HomeworkStatus;

/// Text sent to the chat for one reviewed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMessage(String);

impl StatusMessage {
    /// Builds the notification for a reviewed submission
    pub fn reviewed(homework_name: &str, status: HomeworkStatus) -> Self {
        Self(format!(
            "Your work \"{}\" has been reviewed!\n\n{}",
            homework_name,
            status.verdict()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewed_message_layout() {
        let message = StatusMessage::reviewed("Project 1", HomeworkStatus::Approved);

        assert_eq!(
            message.as_str(),
            "Your work \"Project 1\" has been reviewed!\n\n\
             The reviewer liked everything, you can move on to the next lesson."
        );
    }
}
