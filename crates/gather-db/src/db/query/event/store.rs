//! The storage collaborator used by the listing service.

use std::future::Future;
use std::pin::Pin;

use tracing::Instrument;

use super::order::EventOrder;
use super::predicate::EventPredicate;
use crate::error::DbResult;
use crate::model::event::EventRecord;

/// One page of an organization-scoped event query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub organization_id: i32,
    pub predicate: EventPredicate,
    pub order: EventOrder,
    pub offset: i64,
    pub limit: i64,
}

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = DbResult<T>> + Send + 'a>>;

/// ## Summary
/// Boxes a store future so it runs inside the span current at the call site.
///
/// Needed where `#[tracing::instrument]` sits on a fn that only builds the
/// future; its span is otherwise exited before the query runs.
pub fn in_current_span<'a, T, F>(future: F) -> StoreFuture<'a, T>
where
    F: Future<Output = DbResult<T>> + Send + 'a,
{
    Box::pin(future.instrument(tracing::Span::current()))
}

/// Read-only event storage.
///
/// Implementations filter by organization and predicate, order, skip and take,
/// and return events with type, participants and options loaded.
pub trait EventStore: Send + Sync {
    fn find_events<'a>(&'a self, query: &'a EventQuery) -> StoreFuture<'a, Vec<EventRecord>>;

    fn find_event(
        &self,
        organization_id: i32,
        event_id: uuid::Uuid,
    ) -> StoreFuture<'_, Option<EventRecord>>;
}
