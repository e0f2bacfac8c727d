//! Tally Runner
//!
//! Polls the task-issuing endpoint, computes the requested arithmetic and
//! posts the result to the completion endpoint, forever.
//!
//! Architecture:
//! - Configuration: fixed endpoints and cycle delay
//! - Repository: the task endpoints, behind a trait
//! - Scheduler: the fetch, validate, calculate, submit cycle
//!
//! Each cycle prints one `SUCCESS:` or `ERROR:` line on stdout. Diagnostics go
//! through `tracing` on stderr.

mod config;
mod error;
mod repository;
mod scheduler;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::TaskPoller;
use tally_client::TaskClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_runner=info,tally_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Tally Runner");

    let config = Config::default();
    config.validate()?;
    info!(
        "Loaded configuration: fetch_url={}, submit_url={}",
        config.fetch_url, config.submit_url
    );

    let client = TaskClient::new(config.fetch_url.clone(), config.submit_url.clone());
    let poller = TaskPoller::new(client, config.cycle_delay);

    poller.run().await;

    Ok(())
}
