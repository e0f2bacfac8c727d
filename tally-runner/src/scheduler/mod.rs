//! Scheduler layer for the runner
//!
//! Runs the fetch, validate, calculate and submit cycle, then waits a fixed
//! delay before the next one. Cycles never overlap.

pub mod poller;

pub use poller::TaskPoller;
