//! Duration range arithmetic.

/// Inclusive day range derived from a prediction entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub min_days: i64,
    pub max_days: i64,
}

impl DurationRange {
    /// Compute the range from a predicted mean and its error margin.
    ///
    /// Both bounds round up — the service never under-promises a completion
    /// date. A negative error is not rejected and can invert the range.
    pub fn from_prediction(predicted_mean: f64, error: f64) -> Self {
        Self {
            min_days: predicted_mean.ceil() as i64,
            max_days: (predicted_mean + error).ceil() as i64,
        }
    }

    /// Human-readable summary, singular when the bounds coincide.
    pub fn message(&self) -> String {
        if self.min_days == self.max_days {
            format!("This task may take approximately {} days", self.min_days)
        } else {
            format!(
                "This task may take approximately {}-{} days",
                self.min_days, self.max_days
            )
        }
    }
}
