//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients in `hwbot-client`.
//! They give the poller two narrow seams, fetching submissions and sending
//! notifications, and translate client errors into the runner's error kinds.
//!
//! All repositories are trait-based to enable testing and mocking.

mod notifications;
mod submissions;

// Re-export traits
pub use notifications::NotificationRepository;
pub use submissions::SubmissionRepository;

// Re-export implementations
pub use notifications::TelegramNotificationRepository;
pub use submissions::HttpSubmissionRepository;

// Re-export error kinds
pub use notifications::SendError;
pub use submissions::FetchError;
