//! Data Transfer Objects
//!
//! Shapes of the JSON bodies exchanged with the task endpoints.

pub mod task;
