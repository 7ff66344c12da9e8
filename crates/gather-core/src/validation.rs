//! Validation contract consumed by the listing service.
//!
//! Both checks are side-effect free and fail fast with a typed [`CoreError`].

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::config::EventsConfig;
use crate::error::{CoreError, CoreResult, DateRangeViolation};

pub trait EventValidator: Send + Sync {
    /// ## Summary
    /// Unwraps a lookup result, failing with [`CoreError::NotFound`] when empty.
    ///
    /// ## Errors
    /// Returns `NotFound` if `candidate` is `None`.
    fn check_event_exists<T>(&self, candidate: Option<T>, event_id: Uuid) -> CoreResult<T>;

    /// ## Summary
    /// Checks a caller-supplied date range before it reaches storage.
    ///
    /// ## Errors
    /// Returns `InvalidDateRange` when `start` is after `end` or the span is
    /// longer than the configured maximum.
    fn check_date_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> CoreResult<()>;
}

/// Default validator bounding the catalog date range to a number of days.
#[derive(Debug, Clone, Copy)]
pub struct LimitedRangeValidator {
    max_days: u32,
}

impl LimitedRangeValidator {
    #[must_use]
    pub const fn new(max_days: u32) -> Self {
        Self { max_days }
    }

    #[must_use]
    pub const fn from_config(config: &EventsConfig) -> Self {
        Self::new(config.max_date_range_days)
    }

    #[must_use]
    pub fn max_span(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.max_days))
    }
}

impl EventValidator for LimitedRangeValidator {
    fn check_event_exists<T>(&self, candidate: Option<T>, event_id: Uuid) -> CoreResult<T> {
        candidate.ok_or_else(|| {
            tracing::warn!(%event_id, "Event does not exist in organization");
            CoreError::NotFound(format!("event {event_id}"))
        })
    }

    fn check_date_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> CoreResult<()> {
        let reason = if start > end {
            DateRangeViolation::StartAfterEnd
        } else if end - start > self.max_span() {
            DateRangeViolation::ExceedsLimit {
                max_days: self.max_days,
            }
        } else {
            return Ok(());
        };

        tracing::warn!(%start, %end, %reason, "Rejected event date range");
        Err(CoreError::InvalidDateRange { start, end, reason })
    }
}
