//! Public API for the `dbsteps` library.
//!
//! This crate provides behaviour-driven step definitions exercising
//! PostgreSQL connect/disconnect behaviour, a shared scenario world owning
//! at most one live session, and a client seam so the scenario state machine
//! can be tested without a live server.

pub mod client;
pub mod config;
pub mod descriptor;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod steps;
mod test_helpers;
pub mod world;

pub use client::{ConnectionHandle, DatabaseClient, PgDatabaseClient};
pub use config::DatabaseConfig;
pub use descriptor::ConnectionDescriptor;
pub use error::{StepError, StepResult};
pub use world::DatabaseWorld;
