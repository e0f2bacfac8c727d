//! Cycle error type

use tally_client::ClientError;
use tally_core::TaskError;
use thiserror::Error;

/// Any failure that ends a cycle early
///
/// All variants are handled the same way: logged once, then the next cycle
/// runs on schedule.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Fetching or submitting failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The fetched task was rejected or could not be computed
    #[error(transparent)]
    Task(#[from] TaskError),
}
