//! Server location settings for the database client.
//!
//! The step vocabulary itself carries database name and credentials inline;
//! only the host and port of the server under test come from configuration.

use serde::Deserialize;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Environment variable naming the database host.
pub const ENV_DB_HOST: &str = "DBSTEPS_DB_HOST";
/// Environment variable naming the database port.
pub const ENV_DB_PORT: &str = "DBSTEPS_DB_PORT";

/// Location of the PostgreSQL server exercised by the scenarios.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Host name or address of the server.
    pub host: String,
    /// TCP port the server listens on.
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl DatabaseConfig {
    /// Build a configuration from `DBSTEPS_DB_HOST` and `DBSTEPS_DB_PORT`,
    /// falling back to `localhost:5432` for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var(ENV_DB_HOST).unwrap_or(defaults.host);
        let port = std::env::var(ENV_DB_PORT)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }
}
