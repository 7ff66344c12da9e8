//! Domain types and ambient plumbing shared by the event listing crates.
//!
//! Nothing in here touches the database: office encoding, attend statuses,
//! the validation contract, configuration and tracing setup.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod office;
pub mod telemetry;
pub mod types;
pub mod validation;
