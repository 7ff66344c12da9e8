//! Event listing queries.
//!
//! ## Module Organization
//!
//! - `predicate`: composable filter tree and its factory functions
//! - `order`: storage-level orderings
//! - `store`: the `EventStore` collaborator and its query shape
//! - `pg`: `PostgreSQL` store (diesel-async)
//! - `memory`: in-memory store evaluating the same predicates

pub mod memory;
pub mod order;
pub mod pg;
pub mod predicate;
pub mod store;


pub use memory::MemoryEventStore;
pub use order::EventOrder;
pub use pg::PgEventStore;
pub use predicate::EventPredicate;
pub use store::{EventQuery, EventStore};
