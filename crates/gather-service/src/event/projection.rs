//! Projection of loaded event records into listing records.

use gather_core::types::AttendStatus;
use gather_db::model::event::EventRecord;

use super::types::{EventListItem, EventOffices, EventOptionSummary, EventOptionsSummary};

/// ## Summary
/// Builds the list item `user_id` sees for an event.
///
/// Counts only `Attending` participants. The viewer's status comes from their
/// first participant record, or `Idle` when they have none.
#[must_use]
pub fn to_list_item(record: &EventRecord, user_id: &str) -> EventListItem {
    let event = &record.event;

    let participants_count = record
        .participants
        .iter()
        .filter(|p| p.attend_status.0 == AttendStatus::Attending)
        .count();

    let participating_status = record
        .participants
        .iter()
        .find(|p| p.application_user_id == user_id)
        .map_or(AttendStatus::Idle, |p| p.attend_status.0);

    EventListItem {
        id: event.id,
        image_name: event.image_name.clone(),
        offices: EventOffices {
            value: event.offices.clone(),
        },
        max_participants: event.max_participants,
        is_pinned: event.is_pinned,
        name: event.name.clone(),
        place: event.place.clone(),
        start_date: event.start_date,
        end_date: event.end_date,
        registration_deadline_date: event.registration_deadline,
        participants_count,
        is_creator: event.responsible_user_id == user_id,
        participating_status,
        max_choices: event.max_choices,
    }
}

/// ## Summary
/// Summarizes an event's options.
///
/// Options with the `Default` rule come first; the stored order is otherwise
/// kept.
#[must_use]
pub fn to_options_summary(record: &EventRecord) -> EventOptionsSummary {
    let mut options: Vec<EventOptionSummary> = record
        .options
        .iter()
        .map(|o| EventOptionSummary {
            id: o.id,
            option: o.option.clone(),
            rule: o.rule.0,
        })
        .collect();

    options.sort_by_key(|o| !o.rule.is_default());

    EventOptionsSummary {
        max_options: record.event.max_choices,
        options,
    }
}
