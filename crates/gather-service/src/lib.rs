//! Event listing service: catalog and "my events" views over an
//! [`EventStore`](gather_db::db::query::event::EventStore).

pub mod error;
pub mod event;
