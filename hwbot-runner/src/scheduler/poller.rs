//! Homework status poller
//!
//! Polls the review API for submissions changed since the cursor, notifies
//! the chat about the most recent one and moves the cursor forward. One
//! cycle at a time: fetch, process, advance, sleep.

use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::info;

use hwbot_core::domain::cursor::Cursor;
use hwbot_core::domain::homework::SubmissionRecord;

use crate::config::Config;
use crate::repository::{NotificationRepository, SubmissionRepository};
use crate::service::{CycleReporter, MessageFormatter, PollEvent};

/// How a single poll cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The window was empty
    NoUpdates,
    /// The latest record was delivered to the chat
    Notified,
    /// The latest record could not be formatted; nothing was sent
    Skipped,
    /// The message was formatted but delivery failed
    SendFailed,
    /// The review API could not be reached; the cursor did not move
    FetchFailed,
}

/// Poller that owns the cursor and drives the poll cycle
pub struct Poller {
    cursor: Cursor,
    poll_interval: Duration,
    recovery_delay: Duration,
    submissions: Arc<dyn SubmissionRepository>,
    notifications: Arc<dyn NotificationRepository>,
    formatter: Arc<dyn MessageFormatter>,
    reporter: Arc<dyn CycleReporter>,
}

impl Poller {
    /// Creates a new poller starting its first window at `cursor`
    pub fn new(
        config: &Config,
        cursor: Cursor,
        submissions: Arc<dyn SubmissionRepository>,
        notifications: Arc<dyn NotificationRepository>,
        formatter: Arc<dyn MessageFormatter>,
        reporter: Arc<dyn CycleReporter>,
    ) -> Self {
        Self {
            cursor,
            poll_interval: config.poll_interval,
            recovery_delay: config.recovery_delay,
            submissions,
            notifications,
            formatter,
            reporter,
        }
    }

    /// Start of the next query window
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Runs poll cycles until `shutdown` resolves
    ///
    /// Cycle-level failures never end the loop; shutdown is observed both
    /// while a cycle is in flight and while sleeping.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting homework poller (interval: {:?}, recovery delay: {:?}, from_date: {})",
            self.poll_interval, self.recovery_delay, self.cursor
        );

        tokio::pin!(shutdown);

        loop {
            let outcome = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                outcome = self.poll_once() => outcome,
            };

            let delay = self.delay_after(&outcome);

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = time::sleep(delay) => {}
            }
        }
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let cursor = self.cursor;
        self.reporter.report(&PollEvent::CycleStarted { cursor });

        let statuses = match self.submissions.fetch(cursor).await {
            Ok(statuses) => statuses,
            Err(e) => {
                self.reporter.report(&PollEvent::FetchFailed {
                    cursor,
                    error: e.to_string(),
                });
                return CycleOutcome::FetchFailed;
            }
        };

        let outcome = match statuses.latest() {
            None => {
                self.reporter.report(&PollEvent::NoUpdates);
                CycleOutcome::NoUpdates
            }
            Some(record) => {
                self.reporter.report(&PollEvent::RecordsReceived {
                    count: statuses.homeworks.len(),
                });
                self.notify(record).await
            }
        };

        // Advance even for an empty window so the same range is not polled forever
        self.advance(statuses.next_cursor());

        outcome
    }

    /// How long to sleep after a cycle that ended with `outcome`
    ///
    /// Only clean cycles wait the full poll interval; any cycle-level error
    /// (fetch, format or send) is followed by the short recovery delay.
    pub fn delay_after(&self, outcome: &CycleOutcome) -> Duration {
        match outcome {
            CycleOutcome::NoUpdates | CycleOutcome::Notified => self.poll_interval,
            CycleOutcome::Skipped | CycleOutcome::SendFailed | CycleOutcome::FetchFailed => {
                self.recovery_delay
            }
        }
    }

    /// Formats and sends the latest record
    async fn notify(&self, record: &SubmissionRecord) -> CycleOutcome {
        let message = match self.formatter.format(record) {
            Ok(message) => message,
            Err(error) => {
                self.reporter.report(&PollEvent::RecordSkipped { error });
                return CycleOutcome::Skipped;
            }
        };

        match self.notifications.send(&message).await {
            Ok(()) => {
                self.reporter.report(&PollEvent::MessageSent { message });
                CycleOutcome::Notified
            }
            Err(e) => {
                self.reporter.report(&PollEvent::SendFailed {
                    error: e.to_string(),
                });
                CycleOutcome::SendFailed
            }
        }
    }

    fn advance(&mut self, next: Cursor) {
        let previous = self.cursor;
        self.cursor = next;
        self.reporter.report(&PollEvent::CursorAdvanced {
            from: previous,
            to: next,
        });
    }
}
