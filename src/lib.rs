//! # HELIOS Task Duration Predictor
//!
//! Predicts task duration ranges by task type based on pre-computed model
//! results.
//!
//! This library provides:
//! - A loader for the per-task-type prediction table (CSV, read once at
//!   startup, immutable afterwards)
//! - A keyword-based classifier from free-text task names to task types
//! - An HTTP API exposing predictions, the category list, and a health probe
//!
//! ## Request Flow
//! 1. `GET /predict/{task_name}` arrives with a free-text task name
//! 2. The classifier resolves it to a task type (exact match, then keyword
//!    match, then the fallback category)
//! 3. The prediction table supplies (predicted_mean, error) for that type
//! 4. Both bounds are rounded up into an inclusive day range and returned
//!
//! ## Modules
//! - `api`: HTTP surface (axum)
//! - `classifier`: task name to task type resolution
//! - `duration`: day range arithmetic and message formatting
//! - `predictions`: prediction table loading and storage

pub mod api;
pub mod classifier;
pub mod config;
pub mod duration;
pub mod predictions;

pub use config::Config;
pub use predictions::{PredictionEntry, PredictionTable};
