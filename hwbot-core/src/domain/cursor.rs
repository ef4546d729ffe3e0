//! Polling cursor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Start of the next query window, in Unix seconds
///
/// Sent to the review API as `from_date` and replaced by the server-reported
/// `current_date` after every successful poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(unix_seconds: i64) -> Self {
        Self(unix_seconds)
    }

    /// Cursor positioned at the current wall-clock time
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_close_to_wall_clock() {
        let before = chrono::Utc::now().timestamp();
        let cursor = Cursor::now();
        let after = chrono::Utc::now().timestamp();

        assert!(cursor.as_secs() >= before);
        assert!(cursor.as_secs() <= after);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let cursor = Cursor::new(1000);
        assert_eq!(serde_json::to_string(&cursor).unwrap(), "1000");

        let parsed: Cursor = serde_json::from_str("1300").unwrap();
        assert_eq!(parsed, Cursor::new(1300));
    }

    #[test]
    fn test_ordering() {
        assert!(Cursor::new(500) < Cursor::new(1000));
        assert_eq!(Cursor::new(42).to_string(), "42");
    }
}
