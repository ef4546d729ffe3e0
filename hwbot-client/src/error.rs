//! Error types for the hwbot clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Bot API answered with `ok: false`
    #[error("Bot API rejected the request ({}): {description}", code_label(.code))]
    Rejected {
        /// `error_code` reported by the bot API
        code: Option<u16>,
        /// `description` reported by the bot API
        description: String,
    },
}

fn code_label(code: &Option<u16>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "no code".to_string())
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::api_error(401, "unauthorized");
        assert_eq!(err.to_string(), "API error (status 401): unauthorized");
    }

    #[test]
    fn test_rejected_display() {
        let err = ClientError::Rejected {
            code: Some(400),
            description: "Bad Request: chat not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bot API rejected the request (400): Bad Request: chat not found"
        );

        let err = ClientError::Rejected {
            code: None,
            description: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Bot API rejected the request (no code): nope");
    }
}
