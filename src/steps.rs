//! Step definitions for database connect/disconnect scenarios.
//!
//! Each handler is bound to its step text at link time through the world's
//! step collection; the harness matches scenario lines against these patterns
//! and invokes the handlers with the shared [`DatabaseWorld`]. Handlers stay
//! thin and delegate to the world's methods; a client failure surfaces as a
//! step panic, which the harness records as a failed step before halting the
//! rest of the scenario.

use cucumber::{then, when};

use crate::{descriptor::ConnectionDescriptor, world::DatabaseWorld};

/// Open a connection with the captured database name and credentials.
///
/// # Panics
/// Panics with the client's connection error when the attempt fails.
// Regex rather than `{word}` captures: names and passwords are arbitrary
// free text and may contain spaces.
#[when(regex = r"^I connect to database named (.+?) as user (.+?) with password (.+)$")]
pub async fn connect_to_database(
    world: &mut DatabaseWorld,
    database: String,
    user: String,
    password: String,
) {
    let descriptor = ConnectionDescriptor::new(database, user, password);
    if let Err(error) = world.connect(&descriptor).await {
        panic!("{error}");
    }
}

/// Assert that a connection is currently established.
///
/// # Panics
/// Panics with `connection should be established` when no connection is held.
#[then("I should be able to connect to such database")]
pub fn check_connection(world: &mut DatabaseWorld) {
    assert!(world.is_connected(), "connection should be established");
}

/// Close the current connection.
///
/// # Panics
/// Panics when no connection is held or the client-side close fails.
#[when("I close database connection")]
pub async fn disconnect_from_database(world: &mut DatabaseWorld) {
    if let Err(error) = world.disconnect().await {
        panic!("{error}");
    }
}

/// Assert that the connection has been closed.
///
/// # Panics
/// Panics with `connection should be closed` while a connection is held.
#[then("I should be disconnected")]
pub fn check_disconnection(world: &mut DatabaseWorld) {
    assert!(!world.is_connected(), "connection should be closed");
}
