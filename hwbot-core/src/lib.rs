//! hwbot Core
//!
//! Core types shared by the hwbot crates.
//!
//! This crate contains:
//! - Domain types: cursor, submission records, review statuses, status messages
//! - DTOs: wire shapes of the review API and the Telegram Bot API

pub mod domain;
pub mod dto;
