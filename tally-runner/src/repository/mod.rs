//! Repository layer
//!
//! The seam between the cycle controller and the task endpoints. The HTTP
//! implementation delegates to [`tally_client::TaskClient`]; tests supply an
//! in-memory one.

mod tasks;

pub use tasks::TaskRepository;
