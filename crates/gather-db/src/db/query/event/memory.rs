//! In-memory event store.
//!
//! Holds a fixed snapshot of records and evaluates predicates and orderings
//! directly. Text search lowercases per character like `ILIKE`, so a search
//! finds the same events here as in `PostgreSQL`. Counts the queries it serves
//! so callers can assert when storage was (or was not) reached.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::store::{EventQuery, EventStore, StoreFuture};
use crate::model::event::EventRecord;

#[derive(Debug, Default)]
pub struct MemoryEventStore {
    records: Vec<EventRecord>,
    queries: AtomicUsize,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self {
            records,
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of `find_events`/`find_event` calls served so far.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    fn select(&self, query: &EventQuery) -> Vec<EventRecord> {
        let mut matching: Vec<&EventRecord> = self
            .records
            .iter()
            .filter(|r| r.event.organization_id == query.organization_id)
            .filter(|r| query.predicate.matches(r))
            .collect();

        matching.sort_by(|a, b| query.order.compare(&a.event, &b.event));

        let offset = usize::try_from(query.offset).unwrap_or(0);
        let limit = usize::try_from(query.limit).unwrap_or(0);

        matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl EventStore for MemoryEventStore {
    fn find_events<'a>(&'a self, query: &'a EventQuery) -> StoreFuture<'a, Vec<EventRecord>> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let records = self.select(query);
        tracing::trace!(count = records.len(), "Served in-memory event query");
        Box::pin(async move { Ok(records) })
    }

    fn find_event(
        &self,
        organization_id: i32,
        event_id: uuid::Uuid,
    ) -> StoreFuture<'_, Option<EventRecord>> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let record = self
            .records
            .iter()
            .find(|r| r.event.id == event_id && r.event.organization_id == organization_id)
            .cloned();
        Box::pin(async move { Ok(record) })
    }
}
