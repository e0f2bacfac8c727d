//! Task validation
//!
//! A gate run on every fetched task before anything is computed.

use crate::domain::task::Operation;
use crate::dto::task::TaskPayload;
use crate::error::TaskError;

/// Checks a fetched task for a zero divisor and for missing fields
///
/// The divisor check runs first. Missing fields are reported in the order
/// `id`, `operation`, `left`, `right`.
pub fn validate(payload: &TaskPayload) -> Result<(), TaskError> {
    let divides = payload
        .operation
        .as_deref()
        .and_then(|name| name.parse::<Operation>().ok())
        .is_some_and(|op| op.divides());

    // Matches -0.0 as well
    if divides && payload.right == Some(0.0) {
        return Err(TaskError::DivisionByZero);
    }

    if payload.id.is_none() {
        return Err(TaskError::MissingField("id"));
    }
    if payload.operation.is_none() {
        return Err(TaskError::MissingField("operation"));
    }
    if payload.left.is_none() {
        return Err(TaskError::MissingField("left"));
    }
    if payload.right.is_none() {
        return Err(TaskError::MissingField("right"));
    }

    Ok(())
}
