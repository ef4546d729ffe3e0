//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every Bot API method answers with
///
/// On failure `ok` is false and `description` explains why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}
