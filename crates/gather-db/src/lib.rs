//! Storage layer for event listing: diesel schema and models, the typed
//! predicate tree, query ordering, and the `EventStore` collaborator.

pub mod db;
pub mod error;
pub mod model;
