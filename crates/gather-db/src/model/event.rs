use diesel::{pg::Pg, prelude::*};

use crate::db::enums::{AttendStatusCode, OptionRuleText};
use crate::db::schema;

/// Event classification, scoped to an organization.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::event_types)]
#[diesel(check_for_backend(Pg))]
pub struct EventType {
    pub id: i32,
    pub organization_id: i32,
    pub name: String,
    pub is_shown_with_main_events: bool,
}

/// Event row. `offices` holds either `[]` or a JSON array of office id strings.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::events)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(EventType, foreign_key = event_type_id))]
pub struct Event {
    pub id: uuid::Uuid,
    pub organization_id: i32,
    pub event_type_id: i32,
    pub responsible_user_id: String,
    pub name: String,
    pub place: String,
    pub image_name: Option<String>,
    pub offices: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_deadline: chrono::DateTime<chrono::Utc>,
    pub max_participants: Option<i32>,
    pub max_choices: i32,
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::event_options)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(Event, foreign_key = event_id))]
pub struct EventOption {
    pub id: i32,
    pub event_id: uuid::Uuid,
    pub option: String,
    pub rule: OptionRuleText,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::event_participants)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(Event, foreign_key = event_id))]
pub struct EventParticipant {
    pub id: i32,
    pub event_id: uuid::Uuid,
    pub application_user_id: String,
    pub attend_status: AttendStatusCode,
}

/// An event with its type and eagerly loaded associations.
///
/// Options are ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event: Event,
    pub event_type: EventType,
    pub participants: Vec<EventParticipant>,
    pub options: Vec<EventOption>,
}

/// Insert struct for creating event types
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event_types)]
pub struct NewEventType<'a> {
    pub organization_id: i32,
    pub name: &'a str,
    pub is_shown_with_main_events: bool,
}

/// Insert struct for creating events
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::events)]
pub struct NewEvent<'a> {
    pub id: uuid::Uuid,
    pub organization_id: i32,
    pub event_type_id: i32,
    pub responsible_user_id: &'a str,
    pub name: &'a str,
    pub place: &'a str,
    pub image_name: Option<&'a str>,
    pub offices: &'a str,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_deadline: chrono::DateTime<chrono::Utc>,
    pub max_participants: Option<i32>,
    pub max_choices: i32,
    pub is_pinned: bool,
}

/// Insert struct for creating event options
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event_options)]
pub struct NewEventOption<'a> {
    pub event_id: uuid::Uuid,
    pub option: &'a str,
    pub rule: OptionRuleText,
}

/// Insert struct for creating event participants
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event_participants)]
pub struct NewEventParticipant<'a> {
    pub event_id: uuid::Uuid,
    pub application_user_id: &'a str,
    pub attend_status: AttendStatusCode,
}
