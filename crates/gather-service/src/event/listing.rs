//! The listing service.
//!
//! Each call composes an [`EventPredicate`] from the request, issues one
//! [`EventQuery`] for a single page and projects the loaded records. Date
//! ranges are validated before anything reaches the store; storage errors are
//! passed through untouched.
//!
//! The "my events" view orders according to
//! [`PersonalizedOrdering`]: in `Page` mode the store returns a coarse
//! start-date order and the loaded page is re-ordered around "now"; in
//! `Global` mode the store applies the future-first order itself.

use gather_core::clock::{Clock, SystemClock};
use gather_core::config::{EventsConfig, PersonalizedOrdering};
use gather_core::office;
use gather_core::validation::{EventValidator, LimitedRangeValidator};
use gather_db::db::query::event::predicate::{
    date_range_filter, office_filter, ownership_filter, search_filter, type_filter,
};
use gather_db::db::query::event::{EventOrder, EventPredicate, EventQuery, EventStore};
use uuid::Uuid;

use super::ordering::order_personalized_page;
use super::projection::{to_list_item, to_options_summary};
use super::types::{
    EventListItem, EventOptionsSummary, EventsListingFilterArgs, MyEventsOptions,
    UserAndOrganization,
};
use crate::error::ServiceResult;

pub struct EventListingService<S, V = LimitedRangeValidator, C = SystemClock> {
    store: S,
    validator: V,
    clock: C,
    config: EventsConfig,
}

impl<S: EventStore> EventListingService<S> {
    /// Creates a service using the wall clock and a validator bounded by
    /// `config.max_date_range_days`.
    #[must_use]
    pub fn new(store: S, config: EventsConfig) -> Self {
        let validator = LimitedRangeValidator::from_config(&config);
        Self::with_parts(store, validator, SystemClock, config)
    }
}

impl<S, V, C> EventListingService<S, V, C>
where
    S: EventStore,
    V: EventValidator,
    C: Clock,
{
    #[must_use]
    pub fn with_parts(store: S, validator: V, clock: C, config: EventsConfig) -> Self {
        Self {
            store,
            validator,
            clock,
            config,
        }
    }

    /// Replaces the clock, keeping everything else.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> EventListingService<S, V, C2> {
        EventListingService {
            store: self.store,
            validator: self.validator,
            clock,
            config: self.config,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EventsConfig {
        &self.config
    }

    /// Offset and limit of a 1-based page; pages below 1 read as the first.
    fn page_window(&self, page: u32) -> (i64, i64) {
        let size = i64::from(self.config.page_size);
        let skipped = i64::from(page.max(1) - 1);
        (skipped.saturating_mul(size), size)
    }

    async fn load_page(
        &self,
        organization_id: i32,
        predicate: EventPredicate,
        order: EventOrder,
        page: u32,
        user_id: &str,
    ) -> ServiceResult<Vec<EventListItem>> {
        let (offset, limit) = self.page_window(page);
        let query = EventQuery {
            organization_id,
            predicate,
            order,
            offset,
            limit,
        };

        let records = self.store.find_events(&query).await?;

        Ok(records
            .iter()
            .map(|record| to_list_item(record, user_id))
            .collect())
    }

    /// ## Summary
    /// Returns the options of an event in the requester's organization.
    ///
    /// ## Errors
    /// Returns `NotFound` when the event does not exist in the organization,
    /// or the store's error if the lookup fails.
    #[tracing::instrument(skip(self, requester), fields(organization_id = requester.organization_id))]
    pub async fn get_event_options(
        &self,
        event_id: Uuid,
        requester: &UserAndOrganization,
    ) -> ServiceResult<EventOptionsSummary> {
        let record = self
            .store
            .find_event(requester.organization_id, event_id)
            .await?;
        let record = self.validator.check_event_exists(record, event_id)?;

        let summary = to_options_summary(&record);
        tracing::debug!(options = summary.options.len(), "Loaded event options");

        Ok(summary)
    }

    /// ## Summary
    /// Lists one page of the organization's event catalog, pinned events first
    /// and then by earliest start.
    ///
    /// Without both dates only events that have not ended yet are listed.
    ///
    /// ## Errors
    /// Returns `InvalidDateRange` before querying when both dates are given but
    /// are out of order or span too long, or the store's error if the query
    /// fails.
    #[tracing::instrument(
        skip(self, args, requester),
        fields(organization_id = requester.organization_id, page = args.page)
    )]
    pub async fn get_events_filtered(
        &self,
        args: &EventsListingFilterArgs,
        requester: &UserAndOrganization,
    ) -> ServiceResult<Vec<EventListItem>> {
        let now = self.clock.now();
        let dates = date_range_filter(args.start_date, args.end_date, now, &self.validator)?;
        let probe = office::encode(args.office_id);

        let predicate = type_filter(args.type_id, args.is_only_main_events)
            .and(office_filter(Some(&probe)))
            .and(dates);

        let items = self
            .load_page(
                requester.organization_id,
                predicate,
                EventOrder::PinnedThenStart,
                args.page,
                &requester.user_id,
            )
            .await?;

        tracing::debug!(count = items.len(), "Listed catalog events");
        Ok(items)
    }

    /// ## Summary
    /// Lists one page of events the user hosts or participates in, upcoming
    /// events first.
    ///
    /// ## Errors
    /// Returns the store's error if the query fails.
    #[tracing::instrument(
        skip(self, options),
        fields(organization_id = options.organization_id, filter = options.filter.as_str())
    )]
    pub async fn get_my_events(
        &self,
        options: &MyEventsOptions,
        page: u32,
        office_id: Option<i32>,
    ) -> ServiceResult<Vec<EventListItem>> {
        let now = self.clock.now();
        let probe = office::encode(office_id);

        let predicate = search_filter(options.search_string.as_deref())
            .and(ownership_filter(options.filter, &options.user_id))
            .and(office_filter(Some(&probe)));

        let mode = self.config.personalized_ordering;
        let order = match mode {
            PersonalizedOrdering::Page => EventOrder::StartDescending,
            PersonalizedOrdering::Global => EventOrder::FutureFirst { now },
        };

        let items = self
            .load_page(
                options.organization_id,
                predicate,
                order,
                page,
                &options.user_id,
            )
            .await?;

        let items = match mode {
            PersonalizedOrdering::Page => order_personalized_page(items, now),
            PersonalizedOrdering::Global => items,
        };

        tracing::debug!(count = items.len(), ?mode, "Listed personal events");
        Ok(items)
    }
}
