//! Tasks repository
//!
//! Fetching pending tasks and submitting their results.

use async_trait::async_trait;
use tally_client::{ClientError, Submission, TaskClient, TaskPayload};

/// Repository trait for the task endpoints
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the next pending task
    async fn fetch_task(&self) -> Result<TaskPayload, ClientError>;

    /// Submits the result computed for a task
    async fn submit_result(&self, submission: &Submission) -> Result<(), ClientError>;
}

#[async_trait]
impl TaskRepository for TaskClient {
    async fn fetch_task(&self) -> Result<TaskPayload, ClientError> {
        TaskClient::fetch_task(self).await
    }

    async fn submit_result(&self, submission: &Submission) -> Result<(), ClientError> {
        TaskClient::submit_result(self, submission).await
    }
}
