//! Service layer
//!
//! Services contain the business logic the poller delegates to: turning a
//! submission record into a chat message and reporting what happened in
//! each poll cycle.
//!
//! All services are trait-based to enable testing and dependency injection.

mod formatter;
mod reporter;

// Re-export traits
pub use formatter::MessageFormatter;
pub use reporter::CycleReporter;

// Re-export implementations
pub use formatter::{FormatError, StandardFormatter};
pub use reporter::{PollEvent, TracingReporter};

#[cfg(test)]
pub use reporter::InMemoryReporter;
