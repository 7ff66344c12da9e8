//! Orderings applied by the store before skip/take.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::event::Event;

/// Storage-level ordering. Every variant ends with the event id so pages are
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
    /// Catalog view: pinned first, then earliest start.
    PinnedThenStart,
    /// Coarse "my events" order: latest start first.
    StartDescending,
    /// Global "my events" order: events starting after `now` first (pinned,
    /// then earliest start), then the rest by latest start.
    FutureFirst { now: DateTime<Utc> },
}

impl EventOrder {
    /// Compares two events the way the store orders them.
    #[must_use]
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let primary = match self {
            Self::PinnedThenStart => b
                .is_pinned
                .cmp(&a.is_pinned)
                .then(a.start_date.cmp(&b.start_date)),
            Self::StartDescending => b.start_date.cmp(&a.start_date),
            Self::FutureFirst { now } => {
                let a_future = a.start_date > *now;
                let b_future = b.start_date > *now;
                b_future.cmp(&a_future).then_with(|| {
                    if a_future {
                        b.is_pinned
                            .cmp(&a.is_pinned)
                            .then(a.start_date.cmp(&b.start_date))
                    } else {
                        b.start_date.cmp(&a.start_date)
                    }
                })
            }
        };

        primary.then(a.id.cmp(&b.id))
    }
}
