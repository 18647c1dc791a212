//! Canonical error type for step execution.
//!
//! Connection and close failures from the database client propagate through
//! here untranslated; the harness records the `Err` as a failed step and
//! halts the remaining steps of the scenario.

/// Failure raised while executing a connection step.
#[derive(Debug)]
pub enum StepError {
    /// The client could not establish a connection (unreachable host,
    /// authentication failure, unknown database).
    Connect(sqlx::Error),
    /// Closing the current connection failed.
    Close(sqlx::Error),
    /// A close was requested while no connection was held.
    NoConnection,
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(error) => write!(f, "failed to connect to database: {error}"),
            Self::Close(error) => write!(f, "failed to close database connection: {error}"),
            Self::NoConnection => write!(f, "no open database connection to close"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(error) | Self::Close(error) => Some(error),
            Self::NoConnection => None,
        }
    }
}

/// Result alias used by the step handlers and the client seam.
pub type StepResult<T = ()> = Result<T, StepError>;
