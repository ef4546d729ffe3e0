//! Telegram Bot API client

use hwbot_core::dto::telegram::{BotResponse, SendMessage};
use reqwest::Client;
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::normalize_base_url;

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a new bot client with a default HTTP client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new bot client with a custom HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message body
    ///
    /// # Returns
    /// The sent message as reported by the Bot API
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<serde_json::Value> {
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().await.map_err(redact_url)?;

        // The Bot API answers with its envelope on failures too, so prefer
        // its description over the bare status code.
        match serde_json::from_str::<BotResponse>(&body) {
            Ok(envelope) if envelope.ok => Ok(envelope.result.unwrap_or_default()),
            Ok(envelope) => Err(ClientError::Rejected {
                code: envelope.error_code.or(Some(status.as_u16())),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) if !status.is_success() => Err(ClientError::api_error(status.as_u16(), body)),
            Err(e) => Err(ClientError::ParseError(format!(
                "Failed to parse Bot API response: {}",
                e
            ))),
        }
    }
}

/// The request URL embeds the bot token, so it must not reach error text
fn redact_url(error: reqwest::Error) -> ClientError {
    ClientError::RequestFailed(error.without_url())
}

// The token stays out of logs.
impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};

    async fn send_message_handler(Json(body): Json<SendMessage>) -> Response {
        if body.chat_id != "42" {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found",
                })),
            )
                .into_response();
        }

        Json(serde_json::json!({
            "ok": true,
            "result": {"message_id": 1, "text": body.text},
        }))
        .into_response()
    }

    fn bot_api() -> Router {
        Router::new().route("/bottoken/sendMessage", post(send_message_handler))
    }

    #[test]
    fn test_method_url_embeds_token() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new("https://api.telegram.org", "123:abc");
        let rendered = format!("{:?}", client);

        assert!(!rendered.contains("123:abc"));
        assert!(rendered.contains("https://api.telegram.org"));
    }

    #[tokio::test]
    async fn test_transport_error_omits_token() {
        let base_url = test_server::closed_port().await;
        let client = TelegramClient::new(base_url, "123456:SECRET-BOT-TOKEN");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("SECRET-BOT-TOKEN"));
        assert!(!format!("{:?}", err).contains("SECRET-BOT-TOKEN"));
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let base_url = test_server::spawn(bot_api()).await;
        let client = TelegramClient::new(base_url, "token");

        let sent = client.send_message("42", "hello").await.unwrap();

        assert_eq!(sent["text"], "hello");
    }

    #[tokio::test]
    async fn test_send_message_rejected() {
        let base_url = test_server::spawn(bot_api()).await;
        let client = TelegramClient::new(base_url, "token");

        let err = client.send_message("7", "hello").await.unwrap_err();

        match err {
            ClientError::Rejected { code, description } => {
                assert_eq!(code, Some(400));
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_api_error() {
        let base_url = test_server::spawn(bot_api()).await;
        let client = TelegramClient::new(base_url, "other-token");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    }
}
