//! Request and response records for the listing views.

use chrono::{DateTime, Utc};
use gather_core::office;
use gather_core::types::{AttendStatus, MyEventsFilter, OptionRule};
use serde::{Deserialize, Serialize};

/// The requester of a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAndOrganization {
    pub user_id: String,
    pub organization_id: i32,
}

/// Catalog view filters. `page` is 1-based; values below 1 read as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventsListingFilterArgs {
    pub type_id: Option<i32>,
    pub office_id: Option<i32>,
    #[serde(default)]
    pub is_only_main_events: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page: u32,
}

/// "My events" view filters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MyEventsOptions {
    pub user_id: String,
    pub organization_id: i32,
    pub search_string: Option<String>,
    pub filter: MyEventsFilter,
}

/// Raw office membership of an event, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOffices {
    pub value: String,
}

impl EventOffices {
    /// Office ids listed in the value; empty for outside-office events.
    #[must_use]
    pub fn office_ids(&self) -> Vec<String> {
        office::decode(&self.value)
    }

    #[must_use]
    pub fn is_outside_office(&self) -> bool {
        office::is_outside_office(&self.value)
    }
}

/// One row of a listing page, seen by a particular user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListItem {
    pub id: uuid::Uuid,
    pub image_name: Option<String>,
    pub offices: EventOffices,
    pub max_participants: Option<i32>,
    pub is_pinned: bool,
    pub name: String,
    pub place: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_deadline_date: DateTime<Utc>,
    /// Participants whose status is `Attending`.
    pub participants_count: usize,
    pub is_creator: bool,
    /// The viewing user's own status, `Idle` without a participant record.
    pub participating_status: AttendStatus,
    pub max_choices: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOptionSummary {
    pub id: i32,
    pub option: String,
    pub rule: OptionRule,
}

/// Options of one event with `Default` rule options first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOptionsSummary {
    pub max_options: i32,
    pub options: Vec<EventOptionSummary>,
}
