//! Metric helpers for `dbsteps`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Install a recorder in the test
//! runner to collect them; without one the calls are no-ops.

use metrics::counter;

/// Name of the counter tracking sessions opened by connect steps.
pub const CONNECTIONS_OPENED: &str = "dbsteps_connections_opened_total";
/// Name of the counter tracking sessions closed by disconnect steps.
pub const CONNECTIONS_CLOSED: &str = "dbsteps_connections_closed_total";
/// Name of the counter tracking failed connection attempts.
pub const CONNECT_ERRORS: &str = "dbsteps_connect_errors_total";

/// Record a session opened by a connect step.
pub fn inc_opened() { counter!(CONNECTIONS_OPENED).increment(1); }

/// Record a session closed by a disconnect step.
pub fn inc_closed() { counter!(CONNECTIONS_CLOSED).increment(1); }

/// Record a failed connection attempt.
pub fn inc_connect_errors() { counter!(CONNECT_ERRORS).increment(1); }
