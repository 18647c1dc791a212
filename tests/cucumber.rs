//! Cucumber test runner for the database connection scenarios.
//!
//! Needs a reachable PostgreSQL server holding a `testdb` database owned by
//! `alice`/`secret`; point `DBSTEPS_DB_HOST` / `DBSTEPS_DB_PORT` at it before
//! running with `--features pg-integration`.

use cucumber::World;
use dbsteps::DatabaseWorld;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    DatabaseWorld::run("tests/features/database_connection.feature").await;
}
