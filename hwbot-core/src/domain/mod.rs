//! Core domain types
//!
//! These types describe what the poller works with: the polling cursor,
//! the submission records returned by the review API and the message that
//! ends up in the chat.

pub mod cursor;
pub mod homework;
pub mod message;
