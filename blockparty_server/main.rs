use std::sync::Arc;

use blockparty_app::{app_bus::AppBus, config::Config};
use blockparty_db::{establish_connection_pool, run_migrations, uow::SqliteUnitOfWorkProvider};
use blockparty_types::{
    Result,
    errors::{ApplicationError, DbError},
};
use blockparty_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let config = Arc::new(Config::from_env());
    let app_bus = setup_app_bus(&config).await?;
    let state = AppState::new(app_bus, config.clone());

    WebRouter::serve(state, config.port).await
}

/// Opens the store and wires the bus. A missing `DATABASE_URL` is not
/// fatal: the server still starts and answers every request with a 500.
async fn setup_app_bus(config: &Arc<Config>) -> Result<Option<Arc<AppBus>>, ApplicationError> {
    let db_pool = match establish_connection_pool().await {
        Ok(pool) => pool,
        Err(DbError::MissingDatabaseUrl(var)) => {
            tracing::warn!("{var} is not set, serving without a store");
            return Ok(None);
        }
        Err(e) => {
            tracing::error!("Unable to open the database: {e}");
            return Err(e.into());
        }
    };

    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied.");

    let uow_provider = Arc::new(SqliteUnitOfWorkProvider::new(db_pool));
    Ok(Some(Arc::new(AppBus::new(config.clone(), uow_provider))))
}
