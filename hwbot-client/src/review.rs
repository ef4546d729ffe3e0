//! Review API client

use hwbot_core::domain::cursor::Cursor;
use hwbot_core::dto::statuses::HomeworkStatuses;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::{handle_response, normalize_base_url};

/// HTTP client for the homework review API
///
/// Every request carries `Authorization: OAuth <token>`.
#[derive(Clone)]
pub struct ReviewClient {
    /// Base URL of the API (e.g., "https://praktikum.yandex.ru/api/user_api")
    base_url: String,
    token: String,
    client: Client,
}

impl ReviewClient {
    /// Create a new review API client with a default HTTP client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
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

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch submission statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Start of the query window, in Unix seconds
    ///
    /// # Returns
    /// The records in the window (newest first) and the server's current date
    pub async fn homework_statuses(&self, from_date: Cursor) -> Result<HomeworkStatuses> {
        let url = format!("{}/homework_statuses/", self.base_url);
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.as_secs())])
            .send()
            .await?;

        handle_response(response).await
    }
}

// The token stays out of logs.
impl fmt::Debug for ReviewClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewClient")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}
