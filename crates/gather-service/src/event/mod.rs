//! Event listing.
//!
//! ## Module Organization
//!
//! - `types`: request and response records
//! - `projection`: event records to list items and option summaries
//! - `ordering`: the future/past pass over a loaded "my events" page
//! - `listing`: `EventListingService`, which composes filters and pages

pub mod listing;
pub mod ordering;
pub mod projection;
pub mod types;

pub use listing::EventListingService;
pub use types::{
    EventListItem, EventOffices, EventOptionSummary, EventOptionsSummary,
    EventsListingFilterArgs, MyEventsOptions, UserAndOrganization,
};
