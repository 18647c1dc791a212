//! Connection descriptor assembled from scenario step captures.

use sqlx::postgres::PgConnectOptions;

use crate::config::DatabaseConfig;

/// The three values captured from a connect step, exactly as written in the
/// scenario text. No validation or masking is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    /// Name of the database to open.
    pub database: String,
    /// Role to authenticate as.
    pub user: String,
    /// Password for the role.
    pub password: String,
}

impl ConnectionDescriptor {
    /// Create a descriptor from the raw step captures.
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Combine the captured credentials with the configured server location
    /// into connect options for the PostgreSQL client.
    #[must_use]
    pub fn connect_options(&self, config: &DatabaseConfig) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}
