//! Task endpoints

use tally_core::dto::task::{Submission, TaskPayload};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{TaskClient, status_text};

impl TaskClient {
    /// Fetch the next pending task
    ///
    /// The body is decoded leniently: absent or null fields are left for
    /// validation to reject.
    ///
    /// # Errors
    /// `ClientError::Fetch` on a non-success status, `ClientError::ParseError`
    /// when the body is not a task object.
    pub async fn fetch_task(&self) -> Result<TaskPayload> {
        let response = self.client.get(&self.fetch_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::Fetch {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        let payload = response
            .json::<TaskPayload>()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        debug!("Fetched task {:?}", payload);
        Ok(payload)
    }

    /// Post a computed result
    ///
    /// Sends `{"id": ..., "result": ...}` as `application/json`. The response
    /// body is ignored.
    ///
    /// # Errors
    /// `ClientError::Submit` on a non-success status.
    pub async fn submit_result(&self, submission: &Submission) -> Result<()> {
        let response = self
            .client
            .post(&self.submit_url)
            .json(submission)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::Submit {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        debug!("Submitted result for task {}", submission.id);
        Ok(())
    }
}
