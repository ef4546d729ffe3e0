//! hwbot HTTP Clients
//!
//! Small, type-safe HTTP clients for the two services the bot talks to:
//! - [`ReviewClient`]: the homework review API (`/homework_statuses/`)
//! - [`TelegramClient`]: the Telegram Bot API (`sendMessage`)
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::{ReviewClient, TelegramClient};
//! use hwbot_core::domain::cursor::Cursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hwbot_client::ClientError> {
//!     let review = ReviewClient::new("https://praktikum.yandex.ru/api/user_api", "token");
//!     let statuses = review.homework_statuses(Cursor::now()).await?;
//!
//!     let bot = TelegramClient::new("https://api.telegram.org", "bot-token");
//!     if let Some(record) = statuses.latest() {
//!         bot.send_message("12345", &format!("{:?}", record)).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod review;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use review::ReviewClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and deserialize JSON
///
/// Checks the status code and returns an appropriate error if the request
/// failed, or deserializes the response body if successful.
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// Strip trailing slashes so endpoint paths can be appended with `/`
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080"),
            "http://localhost:8080"
        );
    }
}
