//! Task poller
//!
//! Fetches a task, validates it, computes the result and submits it, then
//! sleeps for the configured delay and starts over. A failing cycle is logged
//! and never stops the loop.

use tally_core::domain::task::{Task, TaskResult};
use tokio::time::{self, Duration};
use tracing::{Instrument, debug, info, info_span};

use crate::error::CycleError;
use crate::repository::TaskRepository;

/// Outcome of a successful cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub task: Task,
    pub result: TaskResult,
}

/// Task poller that runs one cycle at a time, forever
pub struct TaskPoller<R> {
    repository: R,
    cycle_delay: Duration,
}

impl<R: TaskRepository> TaskPoller<R> {
    /// Creates a new task poller
    pub fn new(repository: R, cycle_delay: Duration) -> Self {
        Self {
            repository,
            cycle_delay,
        }
    }

    /// Starts the polling loop
    ///
    /// The delay is measured from the moment a cycle settles, so a slow
    /// endpoint pushes the next cycle back instead of overlapping it.
    pub async fn run(&self) {
        info!("Starting task poller (delay: {:?})", self.cycle_delay);

        let mut cycle: u64 = 0;

        loop {
            cycle += 1;

            let outcome = self
                .poll_once()
                .instrument(info_span!("cycle", number = cycle))
                .await;
            println!("{}", report_line(&outcome));

            time::sleep(self.cycle_delay).await;
        }
    }

    /// Performs a single fetch, validate, calculate and submit cycle
    pub async fn poll_once(&self) -> Result<CycleReport, CycleError> {
        let payload = self.repository.fetch_task().await?;
        let task = Task::try_from(payload)?;
        let result = task.compute()?;

        debug!("Computed {} for task {}", result, task.id);

        self.repository
            .submit_result(&task.submission(result))
            .await?;

        Ok(CycleReport { task, result })
    }
}

/// Renders the single stdout line reporting a cycle
pub fn report_line(outcome: &Result<CycleReport, CycleError>) -> String {
    match outcome {
        Ok(report) => format!("SUCCESS: {}", report.task.describe(report.result)),
        Err(e) => format!("ERROR: {}", e),
    }
}
