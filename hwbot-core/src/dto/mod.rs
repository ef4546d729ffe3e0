//! Data Transfer Objects for the external APIs
//!
//! Request and response bodies exchanged with the review API and the
//! Telegram Bot API.

pub mod statuses;
pub mod telegram;
