//! HTTP API for the task duration predictor.
//!
//! ## Endpoints
//!
//! - `GET /predict/{task_name}` - Predict a duration range for a task name
//! - `GET /task-types` - List the known task type categories
//! - `GET /health` - Health check

mod routes;
pub mod types;

pub use routes::serve;
pub use types::*;
