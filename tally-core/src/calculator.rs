//! Arithmetic on task operands

use crate::domain::task::Operation;
use crate::error::TaskError;

/// Applies `operation` to the operands
///
/// Division follows IEEE-754. Remainder truncates, so the sign of the result
/// follows the dividend (`-7 % 3 == -1`).
pub fn calculate(operation: Operation, left: f64, right: f64) -> f64 {
    match operation {
        Operation::Addition => left + right,
        Operation::Subtraction => left - right,
        Operation::Multiplication => left * right,
        Operation::Division => left / right,
        Operation::Remainder => left % right,
    }
}

/// Parses an operation name and applies it
pub fn evaluate(operation: &str, left: f64, right: f64) -> Result<f64, TaskError> {
    let operation = operation.parse::<Operation>()?;
    Ok(calculate(operation, left, right))
}
