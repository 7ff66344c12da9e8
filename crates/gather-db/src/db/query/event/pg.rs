//! `PostgreSQL` event store.
//!
//! Translates an [`EventPredicate`] into filters on a boxed `events` query;
//! type and participant conditions become subselects so a page is always
//! counted in events, never in joined rows. Associations are loaded
//! afterwards with `belonging_to`/`grouped_by`.

use std::collections::HashMap;

use diesel::dsl::case_when;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use gather_core::constants::OUTSIDE_OFFICE;
use gather_core::error::CoreError;

use super::order::EventOrder;
use super::predicate::EventPredicate;
use super::store::{EventQuery, EventStore, StoreFuture, in_current_span};
use crate::db::DbProvider;
use crate::db::connection::DbConnection;
use crate::db::query::text_match::contains_pattern;
use crate::db::schema::{event_options, event_participants, event_types, events};
use crate::error::DbResult;
use crate::model::event::{Event, EventOption, EventParticipant, EventRecord, EventType};

pub type BoxedEventQuery = events::BoxedQuery<'static, diesel::pg::Pg>;

pub struct PgEventStore<P> {
    provider: P,
}

impl<P: DbProvider> PgEventStore<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

/// ## Summary
/// Returns the organization-scoped base query.
#[must_use]
pub fn in_organization(organization_id: i32) -> BoxedEventQuery {
    events::table
        .filter(events::organization_id.eq(organization_id))
        .into_boxed()
}

/// ## Summary
/// Adds the predicate's conditions to a boxed events query.
///
/// Text search uses `ILIKE`; office containment uses `LIKE` against the
/// stored JSON text, mirroring [`gather_core::office::matches`].
#[must_use]
pub fn apply_predicate(query: BoxedEventQuery, predicate: &EventPredicate) -> BoxedEventQuery {
    match predicate {
        EventPredicate::Always => query,
        EventPredicate::MainEventTypes => query.filter(
            events::event_type_id.eq_any(
                event_types::table
                    .filter(event_types::is_shown_with_main_events.eq(true))
                    .select(event_types::id),
            ),
        ),
        EventPredicate::EventType(type_id) => query.filter(events::event_type_id.eq(*type_id)),
        EventPredicate::Office(probe) => query.filter(
            events::offices
                .like(contains_pattern(probe))
                .or(events::offices.eq(OUTSIDE_OFFICE)),
        ),
        EventPredicate::Search(text) => {
            let pattern = contains_pattern(text);
            query.filter(
                events::name
                    .ilike(pattern.clone())
                    .or(events::place.ilike(pattern)),
            )
        }
        EventPredicate::ResponsibleUser(user_id) => {
            query.filter(events::responsible_user_id.eq(user_id.clone()))
        }
        EventPredicate::Participant(user_id) => query.filter(
            events::id.eq_any(
                event_participants::table
                    .filter(event_participants::application_user_id.eq(user_id.clone()))
                    .select(event_participants::event_id),
            ),
        ),
        EventPredicate::EndsAfter(instant) => query.filter(events::end_date.gt(*instant)),
        EventPredicate::Within { start, end } => query
            .filter(events::start_date.ge(*start))
            .filter(events::end_date.le(*end)),
        EventPredicate::And(parts) => parts.iter().fold(query, apply_predicate),
    }
}

/// ## Summary
/// Applies an [`EventOrder`] to a boxed events query.
#[must_use]
pub fn apply_order(query: BoxedEventQuery, order: EventOrder) -> BoxedEventQuery {
    match order {
        EventOrder::PinnedThenStart => query.order_by((
            events::is_pinned.desc(),
            events::start_date.asc(),
            events::id.asc(),
        )),
        EventOrder::StartDescending => {
            query.order_by((events::start_date.desc(), events::id.asc()))
        }
        // NULL keys only appear in the past partition, which the first key
        // already separates.
        EventOrder::FutureFirst { now } => query
            .order_by(events::start_date.gt(now).desc())
            .then_order_by(case_when(events::start_date.gt(now), events::is_pinned).desc())
            .then_order_by(case_when(events::start_date.gt(now), events::start_date).asc())
            .then_order_by(events::start_date.desc())
            .then_order_by(events::id.asc()),
    }
}

/// ## Summary
/// Loads type, participants and options for a page of events.
///
/// ## Errors
/// Returns database errors, or an invariant violation if an event's type row
/// is missing.
async fn load_records(
    conn: &mut DbConnection<'_>,
    rows: Vec<Event>,
) -> DbResult<Vec<EventRecord>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let type_ids: Vec<i32> = rows.iter().map(|e| e.event_type_id).collect();
    let types: HashMap<i32, EventType> = event_types::table
        .filter(event_types::id.eq_any(type_ids))
        .select(EventType::as_select())
        .load::<EventType>(conn)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    let participants = EventParticipant::belonging_to(&rows)
        .select(EventParticipant::as_select())
        .load::<EventParticipant>(conn)
        .await?
        .grouped_by(&rows);

    let options = EventOption::belonging_to(&rows)
        .select(EventOption::as_select())
        .order(event_options::id.asc())
        .load::<EventOption>(conn)
        .await?
        .grouped_by(&rows);

    rows.into_iter()
        .zip(participants)
        .zip(options)
        .map(|((event, participants), options)| -> DbResult<EventRecord> {
            let event_type = types
                .get(&event.event_type_id)
                .cloned()
                .ok_or(CoreError::InvariantViolation(
                    "event references a missing event type",
                ))?;
            Ok(EventRecord {
                event,
                event_type,
                participants,
                options,
            })
        })
        .collect()
}

impl<P: DbProvider> EventStore for PgEventStore<P> {
    #[tracing::instrument(
        skip(self, query),
        fields(
            organization_id = query.organization_id,
            offset = query.offset,
            limit = query.limit
        )
    )]
    fn find_events<'a>(&'a self, query: &'a EventQuery) -> StoreFuture<'a, Vec<EventRecord>> {
        in_current_span(async move {
            let mut conn = self.provider.get_connection().await?;

            let rows = apply_order(
                apply_predicate(in_organization(query.organization_id), &query.predicate),
                query.order,
            )
            .offset(query.offset)
            .limit(query.limit)
            .load::<Event>(&mut conn)
            .await?;

            tracing::debug!(count = rows.len(), "Loaded event page");

            load_records(&mut conn, rows).await
        })
    }

    #[tracing::instrument(skip(self))]
    fn find_event(
        &self,
        organization_id: i32,
        event_id: uuid::Uuid,
    ) -> StoreFuture<'_, Option<EventRecord>> {
        in_current_span(async move {
            let mut conn = self.provider.get_connection().await?;

            let Some(event) = events::table
                .filter(events::organization_id.eq(organization_id))
                .filter(events::id.eq(event_id))
                .select(Event::as_select())
                .first::<Event>(&mut conn)
                .await
                .optional()?
            else {
                return Ok(None);
            };

            Ok(load_records(&mut conn, vec![event]).await?.pop())
        })
    }
}
