//! Task domain types

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::calculator;
use crate::dto::task::{Submission, TaskPayload};
use crate::error::TaskError;
use crate::validator;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Opaque task identifier
///
/// The issuing endpoint may hand out strings or numbers. The raw JSON value is
/// kept so the identifier goes back on the wire exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(serde_json::Value);

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(serde_json::Value::String(value))
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Remainder => "remainder",
        }
    }

    /// Whether a zero right operand is illegal for this operation
    pub fn divides(&self) -> bool {
        matches!(self, Operation::Division | Operation::Remainder)
    }
}

impl FromStr for Operation {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            "division" => Ok(Operation::Division),
            "remainder" => Ok(Operation::Remainder),
            other => Err(TaskError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated task
///
/// Built from a [`TaskPayload`] only after it passed validation. The
/// operation stays a raw name: an unrecognized one is rejected by the
/// calculator, not the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub operation: String,
    pub left: f64,
    pub right: f64,
}

impl Task {
    /// Computes the result of this task
    pub fn compute(&self) -> Result<TaskResult, TaskError> {
        calculator::evaluate(&self.operation, self.left, self.right).map(TaskResult)
    }

    /// Builds the body submitted for this task
    pub fn submission(&self, result: TaskResult) -> Submission {
        Submission {
            id: self.id.clone(),
            result,
        }
    }

    /// Human-readable summary, e.g. `addition 2 <-> 3 = 5`
    pub fn describe(&self, result: TaskResult) -> String {
        format!(
            "{} {} <-> {} = {}",
            self.operation,
            DisplayNumber(self.left),
            DisplayNumber(self.right),
            result
        )
    }
}

impl TryFrom<TaskPayload> for Task {
    type Error = TaskError;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        validator::validate(&payload)?;

        Ok(Self {
            id: payload.id.ok_or(TaskError::MissingField("id"))?,
            operation: payload
                .operation
                .ok_or(TaskError::MissingField("operation"))?,
            left: payload.left.ok_or(TaskError::MissingField("left"))?,
            right: payload.right.ok_or(TaskError::MissingField("right"))?,
        })
    }
}

/// Computed result of a task
///
/// Serializes integral values as JSON integers, so `5.0` is sent as `5`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TaskResult(pub f64);

impl Serialize for TaskResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            // serde_json writes non-finite values as null
            serializer.serialize_f64(value)
        }
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DisplayNumber(self.0))
    }
}

/// Shortest round-trip formatting in the conventions of ECMAScript
/// `Number::toString`
///
/// Zero of either sign prints as `0`. Magnitudes at or above 1e21 or below
/// 1e-6 use exponent form with an explicit exponent sign (`1e+21`, `1.5e-7`).
struct DisplayNumber(f64);

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            // `{:e}` yields the shortest mantissa, e.g. `1e21` or `-1.5e-7`
            let formatted = format!("{:e}", value);
            return match formatted.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => f.write_str(&formatted),
            };
        }

        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> TaskPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("addition".parse::<Operation>(), Ok(Operation::Addition));
        assert_eq!("remainder".parse::<Operation>(), Ok(Operation::Remainder));
        assert_eq!(
            "Addition".parse::<Operation>(),
            Err(TaskError::UnknownOperation("Addition".to_string()))
        );
    }

    #[test]
    fn test_operation_divides() {
        assert!(Operation::Division.divides());
        assert!(Operation::Remainder.divides());
        assert!(!Operation::Addition.divides());
        assert!(!Operation::Multiplication.divides());
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::from("abc").to_string(), "abc");
        assert_eq!(TaskId::from(42).to_string(), "42");
    }

    #[test]
    fn test_task_from_complete_payload() {
        let task = Task::try_from(payload(json!({
            "id": "abc",
            "operation": "addition",
            "left": 2,
            "right": 3
        })))
        .unwrap();

        assert_eq!(task.id, TaskId::from("abc"));
        assert_eq!(task.operation, "addition");
        assert_eq!(task.left, 2.0);
        assert_eq!(task.right, 3.0);
    }

    #[test]
    fn test_task_from_payload_runs_validation() {
        let err = Task::try_from(payload(json!({
            "id": 1,
            "operation": "division",
            "left": 4,
            "right": 0
        })))
        .unwrap_err();
        assert_eq!(err, TaskError::DivisionByZero);

        let err = Task::try_from(payload(json!({"id": 1, "left": 4, "right": 2}))).unwrap_err();
        assert_eq!(err, TaskError::MissingField("operation"));
    }

    #[test]
    fn test_unknown_operation_passes_validation_but_fails_compute() {
        let task = Task::try_from(payload(json!({
            "id": 1,
            "operation": "power",
            "left": 2,
            "right": 3
        })))
        .unwrap();

        assert_eq!(
            task.compute(),
            Err(TaskError::UnknownOperation("power".to_string()))
        );
    }

    #[test]
    fn test_describe() {
        let task = Task {
            id: TaskId::from("abc"),
            operation: "addition".to_string(),
            left: 2.0,
            right: 3.0,
        };
        let result = task.compute().unwrap();
        assert_eq!(task.describe(result), "addition 2 <-> 3 = 5");

        let task = Task {
            id: TaskId::from("abc"),
            operation: "division".to_string(),
            left: 5.0,
            right: 2.0,
        };
        let result = task.compute().unwrap();
        assert_eq!(task.describe(result), "division 5 <-> 2 = 2.5");
    }

    #[test]
    fn test_result_serializes_integral_values_as_integers() {
        assert_eq!(serde_json::to_value(TaskResult(5.0)).unwrap(), json!(5));
        assert_eq!(serde_json::to_value(TaskResult(-3.0)).unwrap(), json!(-3));
        assert_eq!(serde_json::to_value(TaskResult(2.5)).unwrap(), json!(2.5));
        assert_eq!(
            serde_json::to_value(TaskResult(f64::INFINITY)).unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_result_display() {
        assert_eq!(TaskResult(5.0).to_string(), "5");
        assert_eq!(TaskResult(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(TaskResult(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_result_display_negative_zero() {
        assert_eq!(TaskResult(-0.0).to_string(), "0");

        let task = Task {
            id: TaskId::from(1),
            operation: "remainder".to_string(),
            left: -4.0,
            right: 2.0,
        };
        let result = task.compute().unwrap();
        assert_eq!(task.describe(result), "remainder -4 <-> 2 = 0");

        let task = Task {
            id: TaskId::from(1),
            operation: "multiplication".to_string(),
            left: -4.0,
            right: 0.0,
        };
        let result = task.compute().unwrap();
        assert_eq!(task.describe(result), "multiplication -4 <-> 0 = 0");
    }

    #[test]
    fn test_result_display_exponent_form() {
        assert_eq!(TaskResult(1e21).to_string(), "1e+21");
        assert_eq!(TaskResult(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(TaskResult(1e-7).to_string(), "1e-7");
        assert_eq!(TaskResult(1.5e-7).to_string(), "1.5e-7");

        assert_eq!(TaskResult(1e20).to_string(), "100000000000000000000");
        assert_eq!(TaskResult(1e-6).to_string(), "0.000001");
    }

    #[test]
    fn test_describe_operands_use_exponent_form() {
        let task = Task {
            id: TaskId::from("big"),
            operation: "addition".to_string(),
            left: 1e21,
            right: 1e-7,
        };
        let result = task.compute().unwrap();
        assert_eq!(task.describe(result), "addition 1e+21 <-> 1e-7 = 1e+21");
    }
}
