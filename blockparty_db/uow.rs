use sqlx::{Sqlite, SqlitePool, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use blockparty_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use blockparty_types::errors::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct SqliteUnitOfWorkProvider {
    pool: SqlitePool,
}

impl SqliteUnitOfWorkProvider {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for SqliteUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(Box::new(SqliteUnitOfWork::new(tx)))
    }

    async fn begin_write<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        // A deferred transaction that reads first cannot upgrade to a writer
        // once another connection has committed (SQLITE_BUSY_SNAPSHOT).
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(Box::new(SqliteUnitOfWork::new(tx)))
    }
}

#[derive(Clone)]
pub struct SqliteUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Sqlite>>>,
}

impl<'a> SqliteUnitOfWork<'a> {
    fn new(tx: Transaction<'a, Sqlite>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(tx)),
        }
    }
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for SqliteUnitOfWork<'a> {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
        Arc::new(SqlitePlayerRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        // Repositories handed out by this UoW must be dropped before committing,
        // otherwise the transaction still has other owners and rolls back on Drop.
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .commit()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        } else {
            return Err(ApplicationError::Db(DbError::Transaction(
                "transaction still has multiple owners".to_string(),
            )));
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .rollback()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }
        Ok(())
    }
}
