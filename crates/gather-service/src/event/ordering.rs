//! Future/past ordering of a loaded "my events" page.

use chrono::{DateTime, Utc};

use super::types::EventListItem;

/// ## Summary
/// Re-orders one materialized page around `now`.
///
/// Events starting after `now` come first, pinned before unpinned and then by
/// earliest start. Events that started before `now` follow, latest start
/// first. An event starting exactly at `now` belongs to neither group and is
/// left out.
#[must_use]
pub fn order_personalized_page(items: Vec<EventListItem>, now: DateTime<Utc>) -> Vec<EventListItem> {
    let total = items.len();

    let (mut future, mut past): (Vec<_>, Vec<_>) = items
        .into_iter()
        .filter(|item| item.start_date != now)
        .partition(|item| item.start_date > now);

    let dropped = total - future.len() - past.len();
    if dropped > 0 {
        tracing::debug!(dropped, %now, "Left out events starting exactly now");
    }

    future.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(a.start_date.cmp(&b.start_date))
    });
    past.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    future.extend(past);
    future
}
