//! Shared scenario state for the connection steps.
//!
//! One [`DatabaseWorld`] instance lives for the duration of a scenario. Its
//! `connection` slot is the sole owner of the open session: absent at
//! scenario start, set by the connect step, cleared by the disconnect step,
//! and never mutated anywhere else.

use cucumber::World;

use crate::{
    client::{ConnectionHandle, DatabaseClient, PgDatabaseClient},
    config::DatabaseConfig,
    descriptor::ConnectionDescriptor,
    error::{StepError, StepResult},
};

/// Scenario state shared by all connection steps.
#[derive(World)]
pub struct DatabaseWorld {
    client: Box<dyn DatabaseClient>,
    connection: Option<Box<dyn ConnectionHandle>>,
}

impl Default for DatabaseWorld {
    fn default() -> Self {
        Self::with_client(Box::new(PgDatabaseClient::new(DatabaseConfig::from_env())))
    }
}

impl std::fmt::Debug for DatabaseWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseWorld")
            .field("connected", &self.connection.is_some())
            .finish_non_exhaustive()
    }
}

impl DatabaseWorld {
    /// Build a world over a caller-supplied client implementation.
    #[must_use]
    pub fn with_client(client: Box<dyn DatabaseClient>) -> Self {
        Self {
            client,
            connection: None,
        }
    }

    /// Open a session and store its handle, unconditionally overwriting any
    /// prior value. A displaced handle is not explicitly closed; dropping it
    /// releases the session.
    ///
    /// # Errors
    /// Returns [`StepError::Connect`] if the client fails to establish the
    /// connection; the slot keeps its previous value in that case.
    pub async fn connect(&mut self, descriptor: &ConnectionDescriptor) -> StepResult {
        tracing::debug!(
            database = %descriptor.database,
            user = %descriptor.user,
            "connecting to database"
        );
        let handle = match self.client.connect(descriptor).await {
            Ok(handle) => handle,
            Err(error) => {
                #[cfg(feature = "metrics")]
                crate::metrics::inc_connect_errors();
                tracing::error!(
                    database = %descriptor.database,
                    user = %descriptor.user,
                    %error,
                    "connection attempt failed"
                );
                return Err(error);
            }
        };
        #[cfg(feature = "metrics")]
        crate::metrics::inc_opened();
        tracing::info!(database = %descriptor.database, "connection established");
        self.connection = Some(handle);
        Ok(())
    }

    /// Close the current session and clear the slot.
    ///
    /// # Errors
    /// Returns [`StepError::NoConnection`] when no session is held, or
    /// [`StepError::Close`] if the client-side close fails. The handle is
    /// consumed either way, so the slot is absent after any outcome.
    pub async fn disconnect(&mut self) -> StepResult {
        let handle = self.connection.take().ok_or(StepError::NoConnection)?;
        handle.close().await?;
        #[cfg(feature = "metrics")]
        crate::metrics::inc_closed();
        tracing::info!("connection closed");
        Ok(())
    }

    /// Whether a session handle is currently held.
    #[must_use]
    pub fn is_connected(&self) -> bool { self.connection.is_some() }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, atomic::Ordering};

    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_helpers::{MockClient, MockLedger};

    fn descriptor() -> ConnectionDescriptor { ConnectionDescriptor::new("testdb", "alice", "secret") }

    #[fixture]
    fn ledger() -> Arc<MockLedger> { Arc::default() }

    #[rstest]
    fn starts_without_a_connection(ledger: Arc<MockLedger>) {
        let world = DatabaseWorld::with_client(Box::new(MockClient::new(ledger)));
        assert!(!world.is_connected());
    }

    #[rstest]
    #[tokio::test]
    async fn connect_stores_a_handle(ledger: Arc<MockLedger>) {
        let mut world = DatabaseWorld::with_client(Box::new(MockClient::new(Arc::clone(&ledger))));
        world.connect(&descriptor()).await.unwrap();
        assert!(world.is_connected());
        assert_eq!(ledger.opened.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn disconnect_clears_the_slot(ledger: Arc<MockLedger>) {
        let mut world = DatabaseWorld::with_client(Box::new(MockClient::new(Arc::clone(&ledger))));
        world.connect(&descriptor()).await.unwrap();
        world.disconnect().await.unwrap();
        assert!(!world.is_connected());
        assert_eq!(ledger.closed.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn reconnect_overwrites_without_closing(ledger: Arc<MockLedger>) {
        let mut world = DatabaseWorld::with_client(Box::new(MockClient::new(Arc::clone(&ledger))));
        world.connect(&descriptor()).await.unwrap();
        world.connect(&descriptor()).await.unwrap();
        assert!(world.is_connected());
        assert_eq!(ledger.opened.load(Ordering::SeqCst), 2);
        // The displaced handle is released by drop, never by an explicit close.
        assert_eq!(ledger.closed.load(Ordering::SeqCst), 0);
        assert_eq!(ledger.dropped.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_connect_keeps_the_slot_empty(ledger: Arc<MockLedger>) {
        let mut world =
            DatabaseWorld::with_client(Box::new(MockClient::failing_connect(Arc::clone(&ledger))));
        let error = world.connect(&descriptor()).await.unwrap_err();
        assert!(matches!(error, StepError::Connect(_)));
        assert!(!world.is_connected());
    }

    #[rstest]
    #[tokio::test]
    async fn disconnect_without_connect_fails(ledger: Arc<MockLedger>) {
        let mut world = DatabaseWorld::with_client(Box::new(MockClient::new(ledger)));
        let error = world.disconnect().await.unwrap_err();
        assert!(matches!(error, StepError::NoConnection));
    }

    #[rstest]
    #[tokio::test]
    async fn double_disconnect_fails_on_the_second_call(ledger: Arc<MockLedger>) {
        let mut world = DatabaseWorld::with_client(Box::new(MockClient::new(Arc::clone(&ledger))));
        world.connect(&descriptor()).await.unwrap();
        world.disconnect().await.unwrap();
        let error = world.disconnect().await.unwrap_err();
        assert!(matches!(error, StepError::NoConnection));
        assert_eq!(ledger.closed.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_close_still_clears_the_slot(ledger: Arc<MockLedger>) {
        let mut world =
            DatabaseWorld::with_client(Box::new(MockClient::failing_close(Arc::clone(&ledger))));
        world.connect(&descriptor()).await.unwrap();
        let error = world.disconnect().await.unwrap_err();
        assert!(matches!(error, StepError::Close(_)));
        // The handle was consumed by the close attempt; the scenario aborts
        // here, so the cleared slot is never observed by later steps.
        assert!(!world.is_connected());
    }
}
