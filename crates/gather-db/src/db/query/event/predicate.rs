//! Composable event filters.
//!
//! Each factory returns an [`EventPredicate`]; predicates combine by logical
//! AND and are handed to an [`EventStore`](super::store::EventStore) unevaluated.
//! The same tree is translated to SQL by the `PostgreSQL` store and evaluated
//! directly by [`EventPredicate::matches`] in memory.

use chrono::{DateTime, Utc};
use gather_core::error::CoreResult;
use gather_core::office;
use gather_core::types::MyEventsFilter;
use gather_core::validation::EventValidator;

use crate::db::query::text_match::contains_ignoring_case;
use crate::model::event::EventRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPredicate {
    /// Matches every event.
    Always,
    /// Event type is flagged to be shown with main events.
    MainEventTypes,
    EventType(i32),
    /// Stored offices admit the encoded office probe.
    Office(String),
    /// Name or place contains the text, ignoring case.
    Search(String),
    ResponsibleUser(String),
    /// Some participant record belongs to the user.
    Participant(String),
    /// Event ends strictly after the instant.
    EndsAfter(DateTime<Utc>),
    /// Event starts at or after `start` and ends at or before `end`.
    Within {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    And(Vec<EventPredicate>),
}

impl EventPredicate {
    /// ## Summary
    /// Combines two predicates, flattening nested conjunctions and dropping
    /// `Always`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let mut parts = Vec::new();
        for predicate in [self, other] {
            match predicate {
                Self::Always => {}
                Self::And(inner) => parts.extend(inner),
                leaf => parts.push(leaf),
            }
        }

        match parts.len() {
            0 => Self::Always,
            1 => parts.remove(0),
            _ => Self::And(parts),
        }
    }

    /// Evaluates the predicate against a loaded event.
    #[must_use]
    pub fn matches(&self, record: &EventRecord) -> bool {
        let event = &record.event;
        match self {
            Self::Always => true,
            Self::MainEventTypes => record.event_type.is_shown_with_main_events,
            Self::EventType(type_id) => event.event_type_id == *type_id,
            Self::Office(probe) => office::matches(&event.offices, probe),
            Self::Search(text) => {
                contains_ignoring_case(&event.name, text)
                    || contains_ignoring_case(&event.place, text)
            }
            Self::ResponsibleUser(user_id) => event.responsible_user_id == *user_id,
            Self::Participant(user_id) => record
                .participants
                .iter()
                .any(|p| p.application_user_id == *user_id),
            Self::EndsAfter(instant) => event.end_date > *instant,
            Self::Within { start, end } => event.start_date >= *start && event.end_date <= *end,
            Self::And(parts) => parts.iter().all(|p| p.matches(record)),
        }
    }
}

/// ## Summary
/// Filters by event type.
///
/// `only_main` wins over `type_id`; a missing or zero `type_id` matches all.
#[must_use]
pub fn type_filter(type_id: Option<i32>, only_main: bool) -> EventPredicate {
    if only_main {
        return EventPredicate::MainEventTypes;
    }

    match type_id {
        None | Some(0) => EventPredicate::Always,
        Some(id) => EventPredicate::EventType(id),
    }
}

/// ## Summary
/// Filters by an encoded office probe (see [`gather_core::office::encode`]).
///
/// The outside-office marker or no probe at all matches every event.
#[must_use]
pub fn office_filter(encoded_office: Option<&str>) -> EventPredicate {
    match encoded_office {
        Some(probe) if !office::is_outside_office(probe) => {
            EventPredicate::Office(probe.to_owned())
        }
        _ => EventPredicate::Always,
    }
}

/// Filters by free text in the event name or place. Empty text matches all.
#[must_use]
pub fn search_filter(text: Option<&str>) -> EventPredicate {
    match text {
        Some(text) if !text.is_empty() => EventPredicate::Search(text.to_owned()),
        _ => EventPredicate::Always,
    }
}

/// Filters events the user hosts or participates in.
#[must_use]
pub fn ownership_filter(kind: MyEventsFilter, user_id: &str) -> EventPredicate {
    match kind {
        MyEventsFilter::Host => EventPredicate::ResponsibleUser(user_id.to_owned()),
        MyEventsFilter::Participant => EventPredicate::Participant(user_id.to_owned()),
    }
}

/// ## Summary
/// Filters by date range.
///
/// With either bound missing, keeps events that have not ended by `now`.
/// With both bounds, the range is checked by `validator` first and the
/// predicate keeps events lying entirely inside it.
///
/// ## Errors
/// Propagates the validator's `InvalidDateRange` failure.
pub fn date_range_filter<V: EventValidator>(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    validator: &V,
) -> CoreResult<EventPredicate> {
    match (start, end) {
        (Some(start), Some(end)) => {
            validator.check_date_range(start, end)?;
            Ok(EventPredicate::Within { start, end })
        }
        _ => Ok(EventPredicate::EndsAfter(now)),
    }
}
