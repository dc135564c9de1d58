//! Database connection pool and migrations.
//!
//! PostgreSQL is the record store: it holds users and the credit card
//! records extracted from their reports. Nothing derived from those records
//! is ever written back.

use sqlx::{Pool, Postgres};

/// PostgreSQL connection pool shared by every handler.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// # Configuration
///
/// - Maximum connections: 5
/// - Connections are opened as needed and kept for reuse
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server
/// cannot be reached or refuses the credentials.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Apply the SQL files in `migrations/` that have not run yet.
///
/// Creates the `users` and `credit_cards` tables on a fresh database.
/// Applied migrations are tracked in `_sqlx_migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Embedded at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
