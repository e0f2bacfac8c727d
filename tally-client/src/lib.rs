//! Tally HTTP Client
//!
//! A small, type-safe HTTP client for the task-issuing and task-completion
//! endpoints.
//!
//! # Example
//!
//! ```no_run
//! use tally_client::TaskClient;
//!
//! #[tokio::main]
//! async fn main() -> tally_client::Result<()> {
//!     let client = TaskClient::new(
//!         "http://localhost:8080/api/v1/get-task",
//!         "http://localhost:8080/api/v1/submit-task",
//!     );
//!
//!     let payload = client.fetch_task().await?;
//!     println!("Fetched task: {:?}", payload);
//!     Ok(())
//! }
//! ```

pub mod error;
mod tasks;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use tally_core::dto::task::{Submission, TaskPayload};

use reqwest::{Client, StatusCode};

/// HTTP client for the task endpoints
#[derive(Debug, Clone)]
pub struct TaskClient {
    /// Endpoint handing out pending tasks
    fetch_url: String,
    /// Endpoint accepting computed results
    submit_url: String,
    /// HTTP client instance
    client: Client,
}

impl TaskClient {
    /// Create a new task client
    ///
    /// # Arguments
    /// * `fetch_url` - Full URL of the task-issuing endpoint
    /// * `submit_url` - Full URL of the task-completion endpoint
    pub fn new(fetch_url: impl Into<String>, submit_url: impl Into<String>) -> Self {
        Self::with_client(fetch_url, submit_url, Client::new())
    }

    /// Create a new task client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use tally_client::TaskClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = TaskClient::with_client(
    ///     "http://localhost:8080/api/v1/get-task",
    ///     "http://localhost:8080/api/v1/submit-task",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        fetch_url: impl Into<String>,
        submit_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            fetch_url: fetch_url.into(),
            submit_url: submit_url.into(),
            client,
        }
    }

    pub fn fetch_url(&self) -> &str {
        &self.fetch_url
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }
}

/// Reason phrase for a status, empty when the code has none
fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}
