use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::{env, str::FromStr};

use blockparty_types::errors::DbError;

pub type DbPool = SqlitePool;

/// Environment variable holding the store location, e.g. `sqlite://blockparty.db`.
pub const DATABASE_ENV: &str = "DATABASE_URL";

pub async fn establish_connection_pool() -> Result<DbPool, DbError> {
    dotenvy::dotenv().ok();

    let database_url =
        env::var(DATABASE_ENV).map_err(|_| DbError::MissingDatabaseUrl(DATABASE_ENV))?;

    connect(&database_url).await
}

/// Opens a pool on an explicit database url, creating the file if needed.
pub async fn connect(database_url: &str) -> Result<DbPool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to {database_url}");
    Ok(pool)
}

/// Opens a private in-memory database with the schema applied.
pub async fn establish_test_connection_pool() -> Result<DbPool, DbError> {
    // Each connection to `:memory:` gets its own database, so keep exactly one alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("../migrations").run(pool).await?;
    Ok(())
}
