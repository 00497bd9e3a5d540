//! Visit entity representing a single resolved redirect.

use chrono::{DateTime, Utc};

/// One resolved redirect.
///
/// Timestamps are kept at millisecond precision, matching the persisted
/// epoch-millisecond representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Visit {
    pub timestamp: DateTime<Utc>,
}

impl Visit {
    /// Creates a visit at the given instant, truncated to milliseconds.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: truncate_to_millis(timestamp),
        }
    }

    /// Creates a visit stamped with the current time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Rebuilds a visit from a persisted epoch-millisecond value.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|timestamp| Self { timestamp })
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

/// Drops sub-millisecond precision from an instant.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
