#![allow(clippy::expect_used)]
//! Test helpers for listing tests.
//!
//! Provides:
//! - An event record builder with sensible defaults
//! - Service construction over the in-memory store at a fixed "now"

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use gather_core::clock::FixedClock;
use gather_core::config::EventsConfig;
use gather_core::types::{AttendStatus, OptionRule};
use gather_core::validation::LimitedRangeValidator;
use gather_db::db::enums::{AttendStatusCode, OptionRuleText};
use gather_db::db::query::event::MemoryEventStore;
use gather_db::model::event::{Event, EventOption, EventParticipant, EventRecord, EventType};
use gather_service::event::{EventListItem, EventListingService, UserAndOrganization};

pub const ORG: i32 = 7;
pub const OTHER_ORG: i32 = 8;
pub const HOST: &str = "host-user";
pub const MAIN_TYPE: i32 = 1;
pub const SIDE_TYPE: i32 = 2;

pub type TestService = EventListingService<MemoryEventStore, LimitedRangeValidator, FixedClock>;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn hours(n: i64) -> TimeDelta {
    TimeDelta::hours(n)
}

pub fn days(n: i64) -> TimeDelta {
    TimeDelta::days(n)
}

fn event_type(id: i32) -> EventType {
    EventType {
        id,
        organization_id: ORG,
        name: if id == MAIN_TYPE { "Main" } else { "Side" }.to_owned(),
        is_shown_with_main_events: id == MAIN_TYPE,
    }
}

/// Builds an [`EventRecord`] hosted by [`HOST`] in [`ORG`], lasting two hours,
/// open to every office.
pub struct EventBuilder {
    record: EventRecord,
}

impl EventBuilder {
    pub fn new(name: &str, start: DateTime<Utc>) -> Self {
        Self {
            record: EventRecord {
                event: Event {
                    id: uuid::Uuid::new_v4(),
                    organization_id: ORG,
                    event_type_id: MAIN_TYPE,
                    responsible_user_id: HOST.to_owned(),
                    name: name.to_owned(),
                    place: "Main hall".to_owned(),
                    image_name: None,
                    offices: "[]".to_owned(),
                    start_date: start,
                    end_date: start + hours(2),
                    registration_deadline: start - days(1),
                    max_participants: None,
                    max_choices: 1,
                    is_pinned: false,
                },
                event_type: event_type(MAIN_TYPE),
                participants: Vec::new(),
                options: Vec::new(),
            },
        }
    }

    pub fn pinned(mut self) -> Self {
        self.record.event.is_pinned = true;
        self
    }

    pub fn ends(mut self, end: DateTime<Utc>) -> Self {
        self.record.event.end_date = end;
        self
    }

    pub fn in_org(mut self, organization_id: i32) -> Self {
        self.record.event.organization_id = organization_id;
        self.record.event_type.organization_id = organization_id;
        self
    }

    pub fn host(mut self, user_id: &str) -> Self {
        user_id.clone_into(&mut self.record.event.responsible_user_id);
        self
    }

    pub fn place(mut self, place: &str) -> Self {
        place.clone_into(&mut self.record.event.place);
        self
    }

    pub fn offices(mut self, value: &str) -> Self {
        value.clone_into(&mut self.record.event.offices);
        self
    }

    pub fn side_type(mut self) -> Self {
        self.record.event.event_type_id = SIDE_TYPE;
        self.record.event_type = event_type(SIDE_TYPE);
        self
    }

    pub fn max_choices(mut self, max_choices: i32) -> Self {
        self.record.event.max_choices = max_choices;
        self
    }

    pub fn participant(mut self, user_id: &str, status: AttendStatus) -> Self {
        let id = i32::try_from(self.record.participants.len() + 1).expect("small count");
        self.record.participants.push(EventParticipant {
            id,
            event_id: self.record.event.id,
            application_user_id: user_id.to_owned(),
            attend_status: AttendStatusCode(status),
        });
        self
    }

    pub fn option(mut self, id: i32, label: &str, rule: OptionRule) -> Self {
        self.record.options.push(EventOption {
            id,
            event_id: self.record.event.id,
            option: label.to_owned(),
            rule: OptionRuleText(rule),
        });
        self
    }

    pub fn build(self) -> EventRecord {
        self.record
    }
}

pub fn service(records: Vec<EventRecord>) -> TestService {
    service_with(records, EventsConfig::default())
}

pub fn service_with(records: Vec<EventRecord>, config: EventsConfig) -> TestService {
    EventListingService::new(MemoryEventStore::new(records), config).with_clock(FixedClock(now()))
}

pub fn requester(user_id: &str) -> UserAndOrganization {
    UserAndOrganization {
        user_id: user_id.to_owned(),
        organization_id: ORG,
    }
}

pub fn names(items: &[EventListItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}
