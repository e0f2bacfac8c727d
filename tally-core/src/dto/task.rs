//! Task DTOs

use serde::{Deserialize, Serialize};

use crate::domain::task::{TaskId, TaskResult};

/// Task description as returned by the issuing endpoint
///
/// Every field is optional so an incomplete task still decodes and can be
/// rejected by validation. A JSON `null` decodes as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskPayload {
    pub id: Option<TaskId>,
    pub operation: Option<String>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// Body posted to the completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: TaskId,
    pub result: TaskResult,
}
