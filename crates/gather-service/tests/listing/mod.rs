//! Tests for the catalog, "my events" and options operations.

mod fixtures;
mod my_events;
mod options;
