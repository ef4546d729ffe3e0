//! Scheduler layer for the runner
//!
//! This layer drives the poll cycle: fetching status windows from the
//! review API, handing the latest record to the services and sleeping
//! between cycles.

pub mod poller;

pub use poller::Poller;
