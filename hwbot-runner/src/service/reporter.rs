//! Cycle reporter service
//!
//! The poller reports everything worth knowing about a cycle as a
//! [`PollEvent`]. The production reporter turns events into `tracing`
//! records; tests swap in an in-memory recorder.

use hwbot_core::domain::cursor::Cursor;
use hwbot_core::domain::message::StatusMessage;
use tracing::{debug, error, info, warn};

use crate::service::formatter::FormatError;

/// Something that happened during a poll cycle
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    /// A cycle began fetching from `cursor`
    CycleStarted { cursor: Cursor },

    /// The review API could not be reached or answered garbage
    FetchFailed { cursor: Cursor, error: String },

    /// The window held no submissions
    NoUpdates,

    /// The window held submissions; only the first one is processed
    RecordsReceived { count: usize },

    /// The latest record could not be formatted
    RecordSkipped { error: FormatError },

    /// A status message was delivered to the chat
    MessageSent { message: StatusMessage },

    /// Delivery of a status message failed
    SendFailed { error: String },

    /// The cursor moved to the server-reported date
    CursorAdvanced { from: Cursor, to: Cursor },
}

/// Service trait for observing poll cycles
pub trait CycleReporter: Send + Sync {
    /// Records a single event
    fn report(&self, event: &PollEvent);
}

/// Reporter that writes events to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CycleReporter for TracingReporter {
    fn report(&self, event: &PollEvent) {
        match event {
            PollEvent::CycleStarted { cursor } => {
                debug!(from_date = cursor.as_secs(), "Polling homework statuses");
            }
            PollEvent::FetchFailed { cursor, error } => {
                error!(
                    from_date = cursor.as_secs(),
                    "Failed to get a response from the review API: {}", error
                );
            }
            PollEvent::NoUpdates => {
                debug!("No new homework statuses");
            }
            PollEvent::RecordsReceived { count } => {
                info!(count, "Received homework statuses");
            }
            PollEvent::RecordSkipped { error } => match error {
                FormatError::MalformedRecord { .. } => {
                    error!("Skipping homework record: {}", error);
                }
                FormatError::UnknownStatus { .. } => {
                    warn!("Skipping homework record: {}", error);
                }
            },
            PollEvent::MessageSent { message } => {
                info!(
                    length = message.as_str().len(),
                    "Status message sent to Telegram"
                );
            }
            PollEvent::SendFailed { error } => {
                error!("Failed to send status message: {}", error);
            }
            PollEvent::CursorAdvanced { from, to } => {
                if to < from {
                    warn!(
                        from = from.as_secs(),
                        to = to.as_secs(),
                        "Review API moved the cursor backwards"
                    );
                } else {
                    debug!(from = from.as_secs(), to = to.as_secs(), "Cursor advanced");
                }
            }
        }
    }
}

#[cfg(test)]
pub use recording::InMemoryReporter;
