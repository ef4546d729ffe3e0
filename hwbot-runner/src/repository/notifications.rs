//! Notifications repository
//!
//! Delivers status messages to the configured Telegram chat.

use async_trait::async_trait;
use hwbot_client::{ClientError, TelegramClient};
use hwbot_core::domain::message::StatusMessage;
use thiserror::Error;

/// The bot API refused the message or could not be reached
#[derive(Debug, Error)]
#[error("failed to deliver message to chat {chat_id}: {source}")]
pub struct SendError {
    chat_id: String,
    source: ClientError,
}

impl SendError {
    pub fn new(chat_id: impl Into<String>, source: ClientError) -> Self {
        Self {
            chat_id: chat_id.into(),
            source,
        }
    }
}

/// Repository trait for delivering notifications
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Sends a message to the preconfigured destination
    async fn send(&self, message: &StatusMessage) -> Result<(), SendError>;
}

/// Telegram implementation of NotificationRepository
pub struct TelegramNotificationRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotificationRepository {
    /// Creates a repository that posts into `chat_id`
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl NotificationRepository for TelegramNotificationRepository {
    async fn send(&self, message: &StatusMessage) -> Result<(), SendError> {
        self.client
            .send_message(&self.chat_id, message.as_str())
            .await
            .map_err(|e| SendError::new(&self.chat_id, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwbot_core::domain::homework::HomeworkStatus;

    #[tokio::test]
    async fn test_unreachable_bot_api_error_hides_token() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let repository = TelegramNotificationRepository::new(
            TelegramClient::new(format!("http://{}", addr), "123456:SECRET-BOT-TOKEN"),
            "42".to_string(),
        );
        let message = StatusMessage::reviewed("Project 1", HomeworkStatus::Approved);

        let err = repository.send(&message).await.unwrap_err();

        let rendered = err.to_string();
        assert!(rendered.starts_with("failed to deliver message to chat 42"));
        assert!(!rendered.contains("SECRET-BOT-TOKEN"));
    }
}
