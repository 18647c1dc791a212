#![cfg(test)]
//! Test doubles for the database client seam.

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    client::{ConnectionHandle, DatabaseClient},
    descriptor::ConnectionDescriptor,
    error::{StepError, StepResult},
};

/// Counters shared between a [`MockClient`] and the test observing it.
#[derive(Debug, Default)]
pub(crate) struct MockLedger {
    /// Sessions opened so far.
    pub opened: AtomicUsize,
    /// Sessions closed via an explicit `close` call.
    pub closed: AtomicUsize,
    /// Handles released by drop without an explicit close.
    pub dropped: AtomicUsize,
    /// Descriptor passed to the most recent connect call.
    pub last_descriptor: Mutex<Option<ConnectionDescriptor>>,
}

/// Scripted client: hands out recording handles, or fails every connect.
#[derive(Debug)]
pub(crate) struct MockClient {
    pub ledger: Arc<MockLedger>,
    pub fail_connect: bool,
    pub fail_close: bool,
}

impl MockClient {
    pub fn new(ledger: Arc<MockLedger>) -> Self {
        Self {
            ledger,
            fail_connect: false,
            fail_close: false,
        }
    }

    pub fn failing_connect(ledger: Arc<MockLedger>) -> Self {
        Self {
            fail_connect: true,
            ..Self::new(ledger)
        }
    }

    pub fn failing_close(ledger: Arc<MockLedger>) -> Self {
        Self {
            fail_close: true,
            ..Self::new(ledger)
        }
    }
}

struct MockHandle {
    ledger: Arc<MockLedger>,
    fail_close: bool,
    closed: bool,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        if !self.closed {
            self.ledger.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl ConnectionHandle for MockHandle {
    async fn close(mut self: Box<Self>) -> StepResult {
        if self.fail_close {
            return Err(StepError::Close(sqlx::Error::WorkerCrashed));
        }
        self.closed = true;
        self.ledger.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl DatabaseClient for MockClient {
    async fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
    ) -> StepResult<Box<dyn ConnectionHandle>> {
        *self.ledger.last_descriptor.lock().unwrap() = Some(descriptor.clone());
        if self.fail_connect {
            return Err(StepError::Connect(sqlx::Error::PoolClosed));
        }
        self.ledger.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockHandle {
            ledger: Arc::clone(&self.ledger),
            fail_close: self.fail_close,
            closed: false,
        }))
    }
}
