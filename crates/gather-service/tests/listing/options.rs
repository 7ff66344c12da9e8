#![allow(clippy::expect_used)]
//! Tests for event options lookup.

use gather_core::types::OptionRule;

use super::fixtures::*;

#[test_log::test(tokio::test)]
async fn options_are_listed_default_first() {
    let record = EventBuilder::new("Lunch", now() + days(1))
        .max_choices(2)
        .option(10, "Pasta", OptionRule::IgnoreSingleJoin)
        .option(11, "Soup", OptionRule::Default)
        .option(12, "Salad", OptionRule::IgnoreSingleJoin)
        .build();
    let event_id = record.event.id;
    let service = service(vec![record]);

    let summary = service
        .get_event_options(event_id, &requester(HOST))
        .await
        .expect("options");

    assert_eq!(summary.max_options, 2);
    let labels: Vec<&str> = summary.options.iter().map(|o| o.option.as_str()).collect();
    assert_eq!(labels, ["Soup", "Pasta", "Salad"]);
    assert_eq!(summary.options[0].id, 11);
    assert_eq!(summary.options[0].rule, OptionRule::Default);
}

#[test_log::test(tokio::test)]
async fn unknown_event_is_not_found() {
    let service = service(vec![EventBuilder::new("Lunch", now()).build()]);

    let err = service
        .get_event_options(uuid::Uuid::new_v4(), &requester(HOST))
        .await
        .expect_err("missing event");

    assert!(err.is_not_found());
    assert!(!err.is_invalid_date_range());
}

#[test_log::test(tokio::test)]
async fn event_in_another_organization_is_not_found() {
    let record = EventBuilder::new("Lunch", now())
        .in_org(OTHER_ORG)
        .option(1, "Soup", OptionRule::Default)
        .build();
    let event_id = record.event.id;
    let service = service(vec![record]);

    let err = service
        .get_event_options(event_id, &requester(HOST))
        .await
        .expect_err("foreign event");

    assert!(err.is_not_found());
    assert_eq!(service.store().query_count(), 1);
}
