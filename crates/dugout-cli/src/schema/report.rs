use chrono::{DateTime, Utc};
use serde::Serialize;

/// A command result stamped with its creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    /// Timestamp when the report was created (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: T,
}

impl<T> Report<T> {
    pub fn new(result: T) -> Self {
        Self {
            generated_at: Utc::now(),
            result,
        }
    }
}
