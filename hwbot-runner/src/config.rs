//! Runner configuration
//!
//! Defines all configurable parameters for the runner: API credentials,
//! the destination chat, polling and recovery intervals, HTTP timeout and
//! the optional log file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PRACTICUM_API_URL: &str = "https://praktikum.yandex.ru/api/user_api";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Errors detected while loading or validating configuration
///
/// These are the only fatal errors of the runner; they surface before the
/// polling loop starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("{name}={value:?} is not valid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{0}")]
    Validation(String),
}

/// Runner configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Bot token for the Telegram Bot API
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub chat_id: String,

    /// Review API base URL
    pub practicum_api_url: String,

    /// Bot API base URL
    pub telegram_api_url: String,

    /// How long to sleep between successful poll cycles
    pub poll_interval: Duration,

    /// How long to wait after a cycle that hit a fetch, format or send error
    pub recovery_delay: Duration,

    /// Timeout applied to every HTTP request
    pub http_timeout: Duration,

    /// Where to write the rotated log file, if anywhere
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(practicum_token: String, telegram_token: String, chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            chat_id,
            practicum_api_url: DEFAULT_PRACTICUM_API_URL.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(300),
            recovery_delay: Duration::from_secs(5),
            http_timeout: Duration::from_secs(30),
            log_file: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - BOT_TIME_SLEEP (optional, seconds, default: 300)
    /// - RECOVERY_DELAY (optional, seconds, default: 5)
    /// - HTTP_TIMEOUT (optional, seconds, default: 30)
    /// - LOGFILE (optional)
    /// - PRACTICUM_API_URL (optional)
    /// - TELEGRAM_API_URL (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());
        let seconds = |name: &'static str, default: u64| -> Result<Duration, ConfigError> {
            match optional(name) {
                None => Ok(Duration::from_secs(default)),
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::Invalid {
                        name,
                        value,
                        reason: "expected a whole number of seconds",
                    }),
            }
        };

        let mut config = Self::new(
            required("PRACTICUM_TOKEN")?,
            required("TELEGRAM_TOKEN")?,
            required("TELEGRAM_CHAT_ID")?,
        );

        config.poll_interval = seconds("BOT_TIME_SLEEP", 300)?;
        config.recovery_delay = seconds("RECOVERY_DELAY", 5)?;
        config.http_timeout = seconds("HTTP_TIMEOUT", 30)?;
        config.log_file = optional("LOGFILE").map(PathBuf::from);

        if let Some(url) = optional("PRACTICUM_API_URL") {
            config.practicum_api_url = url;
        }
        if let Some(url) = optional("TELEGRAM_API_URL") {
            config.telegram_api_url = url;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.practicum_token.is_empty() {
            return Err(ConfigError::Missing("PRACTICUM_TOKEN"));
        }

        if self.telegram_token.is_empty() {
            return Err(ConfigError::Missing("TELEGRAM_TOKEN"));
        }

        if self.chat_id.is_empty() {
            return Err(ConfigError::Missing("TELEGRAM_CHAT_ID"));
        }

        for url in [&self.practicum_api_url, &self.telegram_api_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "{} must start with http:// or https://",
                    url
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Validation(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        if self.recovery_delay.is_zero() {
            return Err(ConfigError::Validation(
                "recovery_delay must be greater than 0".to_string(),
            ));
        }

        if self.recovery_delay >= self.poll_interval {
            return Err(ConfigError::Validation(format!(
                "recovery_delay ({:?}) must be shorter than poll_interval ({:?})",
                self.recovery_delay, self.poll_interval
            )));
        }

        if self.http_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "http_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("chat_id", &self.chat_id)
            .field("practicum_api_url", &self.practicum_api_url)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("recovery_delay", &self.recovery_delay)
            .field("http_timeout", &self.http_timeout)
            .field("log_file", &self.log_file)
            .finish()
    }
}
