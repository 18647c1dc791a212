//! Seam over the PostgreSQL client used by the connection steps.
//!
//! The step handlers only ever see the [`DatabaseClient`] and
//! [`ConnectionHandle`] traits, keeping the scenario state machine testable
//! without a live server. [`PgDatabaseClient`] is the production
//! implementation over [`sqlx::PgConnection`].

use async_trait::async_trait;
use sqlx::{ConnectOptions, Connection, postgres::PgConnection};

use crate::{
    config::DatabaseConfig,
    descriptor::ConnectionDescriptor,
    error::{StepError, StepResult},
};

/// An open database session.
///
/// Dropping a handle releases the underlying session without the graceful
/// close handshake; [`ConnectionHandle::close`] performs the explicit close.
#[async_trait]
pub trait ConnectionHandle: Send {
    /// Close the session.
    ///
    /// # Errors
    /// Returns [`StepError::Close`] if the client-side close fails.
    async fn close(self: Box<Self>) -> StepResult;
}

/// Capability to open database sessions.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Open a new session described by `descriptor`.
    ///
    /// # Errors
    /// Returns [`StepError::Connect`] when the server is unreachable, the
    /// credentials are rejected, or the database does not exist.
    async fn connect(&self, descriptor: &ConnectionDescriptor)
    -> StepResult<Box<dyn ConnectionHandle>>;
}

/// Production client backed by a single `sqlx` PostgreSQL connection per
/// session. No pooling; each connect step opens its own session.
#[derive(Clone, Debug)]
pub struct PgDatabaseClient {
    config: DatabaseConfig,
}

impl PgDatabaseClient {
    /// Create a client targeting the configured server.
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self { Self { config } }
}

struct PgHandle(PgConnection);

#[async_trait]
impl ConnectionHandle for PgHandle {
    async fn close(self: Box<Self>) -> StepResult { self.0.close().await.map_err(StepError::Close) }
}

#[async_trait]
impl DatabaseClient for PgDatabaseClient {
    async fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
    ) -> StepResult<Box<dyn ConnectionHandle>> {
        let options = descriptor.connect_options(&self.config);
        let connection = options.connect().await.map_err(StepError::Connect)?;
        Ok(Box::new(PgHandle(connection)))
    }
}
