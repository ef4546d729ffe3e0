//! Submissions repository
//!
//! Fetches homework status windows from the review API.

use async_trait::async_trait;
use hwbot_client::{ClientError, ReviewClient};
use hwbot_core::domain::cursor::Cursor;
use hwbot_core::dto::statuses::HomeworkStatuses;
use thiserror::Error;

/// The review API could not be reached or its answer could not be parsed
#[derive(Debug, Error)]
#[error("failed to fetch homework statuses: {source}")]
pub struct FetchError {
    #[from]
    source: ClientError,
}

/// Repository trait for reading submission statuses
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Fetches every submission whose status changed since `cursor`
    ///
    /// # Arguments
    /// * `cursor` - Start of the query window
    async fn fetch(&self, cursor: Cursor) -> Result<HomeworkStatuses, FetchError>;
}

/// HTTP implementation of SubmissionRepository
pub struct HttpSubmissionRepository {
    client: ReviewClient,
}

impl HttpSubmissionRepository {
    pub fn new(client: ReviewClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmissionRepository for HttpSubmissionRepository {
    async fn fetch(&self, cursor: Cursor) -> Result<HomeworkStatuses, FetchError> {
        let statuses = self.client.homework_statuses(cursor).await?;
        Ok(statuses)
    }
}
