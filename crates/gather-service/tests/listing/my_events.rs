#![allow(clippy::expect_used)]
//! Tests for the "my events" view.

use gather_core::config::{EventsConfig, PersonalizedOrdering};
use gather_core::types::{AttendStatus, MyEventsFilter};
use gather_service::event::MyEventsOptions;

use super::fixtures::*;

fn hosted_by(user_id: &str) -> MyEventsOptions {
    MyEventsOptions {
        user_id: user_id.to_owned(),
        organization_id: ORG,
        search_string: None,
        filter: MyEventsFilter::Host,
    }
}

fn joined_by(user_id: &str) -> MyEventsOptions {
    MyEventsOptions {
        filter: MyEventsFilter::Participant,
        ..hosted_by(user_id)
    }
}

fn global() -> EventsConfig {
    EventsConfig {
        personalized_ordering: PersonalizedOrdering::Global,
        ..EventsConfig::default()
    }
}

#[test_log::test(tokio::test)]
async fn upcoming_pinned_then_upcoming_then_past() {
    let service = service(vec![
        EventBuilder::new("C", now() - hours(1)).build(),
        EventBuilder::new("B", now() + hours(2)).build(),
        EventBuilder::new("A", now() + hours(1)).pinned().build(),
    ]);

    let items = service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");

    assert_eq!(names(&items), ["A", "B", "C"]);
}

#[test_log::test(tokio::test)]
async fn future_events_precede_past_events() {
    let service = service(vec![
        EventBuilder::new("Past pinned", now() - days(1)).pinned().build(),
        EventBuilder::new("Long ago", now() - days(20)).build(),
        EventBuilder::new("Far", now() + days(9)).build(),
        EventBuilder::new("Near pinned", now() + days(3)).pinned().build(),
        EventBuilder::new("Near", now() + days(1)).build(),
    ]);

    let items = service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");

    assert_eq!(
        names(&items),
        ["Near pinned", "Near", "Far", "Past pinned", "Long ago"]
    );
    let split = items
        .iter()
        .position(|item| item.start_date < now())
        .expect("a past event");
    assert!(items[..split].iter().all(|item| item.start_date > now()));
    assert!(items[split..].iter().all(|item| item.start_date < now()));
}

#[test_log::test(tokio::test)]
async fn event_starting_exactly_now_is_dropped_in_page_mode() {
    let records = vec![
        EventBuilder::new("Now", now()).build(),
        EventBuilder::new("Later", now() + hours(1)).build(),
    ];

    let page_mode = service(records.clone())
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");
    let global_mode = service_with(records, global())
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");

    assert_eq!(names(&page_mode), ["Later"]);
    assert_eq!(names(&global_mode), ["Later", "Now"]);
}

#[test_log::test(tokio::test)]
async fn page_mode_orders_within_page_and_global_mode_across_pages() {
    let config = EventsConfig {
        page_size: 2,
        ..EventsConfig::default()
    };
    let records = vec![
        EventBuilder::new("Pinned far", now() + days(10)).pinned().build(),
        EventBuilder::new("Second", now() + days(2)).build(),
        EventBuilder::new("First", now() + days(1)).build(),
        EventBuilder::new("Past", now() - days(1)).build(),
    ];

    let page_service = service_with(records.clone(), config.clone());
    let page_one = page_service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("page 1");
    let page_two = page_service
        .get_my_events(&hosted_by(HOST), 2, None)
        .await
        .expect("page 2");
    assert_eq!(names(&page_one), ["Pinned far", "Second"]);
    assert_eq!(names(&page_two), ["First", "Past"]);

    let global_service = service_with(
        records,
        EventsConfig {
            personalized_ordering: PersonalizedOrdering::Global,
            ..config
        },
    );
    let page_one = global_service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("page 1");
    let page_two = global_service
        .get_my_events(&hosted_by(HOST), 2, None)
        .await
        .expect("page 2");
    assert_eq!(names(&page_one), ["Pinned far", "First"]);
    assert_eq!(names(&page_two), ["Second", "Past"]);
}

#[test_log::test(tokio::test)]
async fn host_filter_matches_responsible_user_only() {
    let service = service(vec![
        EventBuilder::new("Mine", now() + days(1)).build(),
        EventBuilder::new("Joined", now() + days(2))
            .host("someone-else")
            .participant(HOST, AttendStatus::Attending)
            .build(),
    ]);

    let items = service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");

    assert_eq!(names(&items), ["Mine"]);
    assert!(items[0].is_creator);
}

#[test_log::test(tokio::test)]
async fn participant_filter_matches_any_participant_record() {
    let service = service(vec![
        EventBuilder::new("Going", now() + days(1))
            .participant("guest", AttendStatus::Attending)
            .build(),
        EventBuilder::new("Declined", now() + days(2))
            .participant("guest", AttendStatus::NotAttending)
            .build(),
        EventBuilder::new("Not invited", now() + days(3))
            .participant("other", AttendStatus::Attending)
            .build(),
    ]);

    let items = service
        .get_my_events(&joined_by("guest"), 1, None)
        .await
        .expect("my events");

    assert_eq!(names(&items), ["Going", "Declined"]);
    assert_eq!(items[0].participating_status, AttendStatus::Attending);
    assert_eq!(items[1].participating_status, AttendStatus::NotAttending);
    assert!(items.iter().all(|item| !item.is_creator));
}

#[test_log::test(tokio::test)]
async fn search_matches_name_or_place_ignoring_case() {
    let service = service(vec![
        EventBuilder::new("Chess club", now() + days(1)).build(),
        EventBuilder::new("Yoga", now() + days(2))
            .place("Chess room")
            .build(),
        EventBuilder::new("Running", now() + days(3)).build(),
    ]);
    let search = |text: &str| MyEventsOptions {
        search_string: Some(text.to_owned()),
        ..hosted_by(HOST)
    };

    let chess = service
        .get_my_events(&search("CHESS"), 1, None)
        .await
        .expect("my events");
    assert_eq!(names(&chess), ["Chess club", "Yoga"]);

    let everything = service
        .get_my_events(&search(""), 1, None)
        .await
        .expect("my events");
    assert_eq!(everything.len(), 3);
}

#[test_log::test(tokio::test)]
async fn office_filter_applies_to_my_events() {
    let service = service(vec![
        EventBuilder::new("Everyone", now() + days(1)).build(),
        EventBuilder::new("Office 5", now() + days(2))
            .offices("[\"5\"]")
            .build(),
        EventBuilder::new("Office 6", now() + days(3))
            .offices("[\"6\"]")
            .build(),
    ]);

    let office_5 = service
        .get_my_events(&hosted_by(HOST), 1, Some(5))
        .await
        .expect("my events");
    let no_office = service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");

    assert_eq!(names(&office_5), ["Everyone", "Office 5"]);
    assert_eq!(no_office.len(), 3);
}

#[test_log::test(tokio::test)]
async fn my_events_are_scoped_to_the_requested_organization() {
    let service = service(vec![
        EventBuilder::new("Ours", now() + days(1)).build(),
        EventBuilder::new("Theirs", now() + days(1))
            .in_org(OTHER_ORG)
            .build(),
    ]);

    let ours = service
        .get_my_events(&hosted_by(HOST), 1, None)
        .await
        .expect("my events");
    let theirs = service
        .get_my_events(
            &MyEventsOptions {
                organization_id: OTHER_ORG,
                ..hosted_by(HOST)
            },
            1,
            None,
        )
        .await
        .expect("my events");

    assert_eq!(names(&ours), ["Ours"]);
    assert_eq!(names(&theirs), ["Theirs"]);
}
