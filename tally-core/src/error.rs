//! Error types for task validation and calculation

use thiserror::Error;

/// Errors raised while inspecting or computing a task
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// A required field was absent (or null) in the fetched task
    #[error("Missing data: {0}")]
    MissingField(&'static str),

    /// Division or remainder with a zero right operand
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Operation name outside the supported set
    #[error("Unexpected operation: {0}")]
    UnknownOperation(String),
}
