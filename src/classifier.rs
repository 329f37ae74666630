//! Keyword-based task classification.
//!
//! Maps a free-text task name to one of the task types in the prediction
//! table. Matching is tried in strict priority order: exact (case-insensitive)
//! key match, then ordered keyword substring match, then the fallback
//! category.

use crate::predictions::PredictionTable;

/// Category returned when nothing else matches. Expected to be seeded in the
/// prediction table; if it is missing, lookup fails downstream with a 404
/// rather than a crash.
pub const FALLBACK_TASK_TYPE: &str = "Special Procedure";

/// Keyword → task type, scanned in order; the first keyword contained in the
/// lowercased input wins, so the ordering here is significant.
const KEYWORD_MAP: &[(&str, &str)] = &[
    ("removal", "Removal / Installation"),
    ("installation", "Removal / Installation"),
    ("install", "Removal / Installation"),
    ("remove", "Removal / Installation"),
    ("cleaning", "Cleaning"),
    ("clean", "Cleaning"),
    ("inspection", "Inspection / Check"),
    ("inspect", "Inspection / Check"),
    ("check", "Inspection / Check"),
    ("test", "Tests"),
    ("tests", "Tests"),
];

/// Resolve a task name to a task type.
///
/// Always returns a category string; the caller must still verify it is a
/// key of `table`, since the fallback category is not guaranteed present.
pub fn classify(table: &PredictionTable, task_name: &str) -> String {
    let lower = task_name.to_lowercase();

    // Exact match first; table order breaks case-insensitive collisions
    for task_type in table.task_types() {
        if task_type.to_lowercase() == lower {
            return task_type.to_string();
        }
    }

    for (keyword, task_type) in KEYWORD_MAP {
        if lower.contains(keyword) {
            return (*task_type).to_string();
        }
    }

    FALLBACK_TASK_TYPE.to_string()
}
