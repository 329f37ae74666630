//! API response types.

use serde::Serialize;

/// Successful prediction for a task name.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    /// The task name as submitted, echoed verbatim
    pub task_name: String,

    /// Resolved task type category
    pub task_type: String,

    /// Lower bound of the predicted duration, in days
    pub predicted_days: i64,

    /// Upper bound of the predicted duration, in days
    pub max_days: i64,

    /// Human-readable duration summary
    pub message: String,
}

/// The known task type categories, in load order.
#[derive(Debug, Clone, Serialize)]
pub struct TaskTypesResponse {
    pub task_types: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
