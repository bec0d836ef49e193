use sqlx::{Sqlite, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use blockparty_app::repository::PlayerRepository;
use blockparty_types::{
    Result,
    common::Player,
    errors::{ApplicationError, DbError},
};

use crate::models::{self as db_models};

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct SqlitePlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Sqlite>>>,
}

impl<'a> SqlitePlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Sqlite>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for SqlitePlayerRepository<'a> {
    async fn exists(&self, player_id: &str) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT player_id FROM players WHERE player_id = ?")
                .bind(player_id)
                .fetch_optional(&mut **tx_guard)
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.is_some())
    }

    async fn get_by_id(&self, player_id: &str) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let player = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT player_id, players_name, profile_photo, total_score
              FROM players
              WHERE player_id = ?
              "#,
        )
        .bind(player_id)
        .fetch_optional(&mut **tx_guard)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id.to_string())))?;

        Ok(player.into())
    }

    async fn list_by_score(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let players = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT player_id, players_name, profile_photo, total_score
              FROM players
              ORDER BY total_score DESC, rowid ASC
              "#,
        )
        .fetch_all(&mut **tx_guard)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(players.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let players = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT player_id, players_name, profile_photo, total_score
              FROM players
              ORDER BY rowid ASC
              "#,
        )
        .fetch_all(&mut **tx_guard)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(players.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, player: &Player) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query(
            r#"
              INSERT INTO players (player_id, players_name, profile_photo, total_score)
              VALUES (?, ?, ?, ?)
              ON CONFLICT (player_id) DO NOTHING
              "#,
        )
        .bind(&player.player_id)
        .bind(&player.players_name)
        .bind(&player.profile_photo)
        .bind(player.total_score)
        .execute(&mut **tx_guard)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, player: &Player) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query(
            r#"
              UPDATE players
              SET players_name = ?, profile_photo = ?, total_score = ?
              WHERE player_id = ?
              "#,
        )
        .bind(&player.players_name)
        .bind(&player.profile_photo)
        .bind(player.total_score)
        .bind(&player.player_id)
        .execute(&mut **tx_guard)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, player_id: &str) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM players WHERE player_id = ?")
            .bind(player_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blockparty_app::uow::UnitOfWorkProvider;

    use super::*;
    use crate::{establish_test_connection_pool, uow::SqliteUnitOfWorkProvider};

    async fn provider() -> Result<SqliteUnitOfWorkProvider> {
        let pool = establish_test_connection_pool().await?;
        Ok(SqliteUnitOfWorkProvider::new(pool))
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() -> Result<()> {
        let provider = provider().await?;
        let uow = provider.begin().await?;
        let repo = uow.players();

        assert!(!repo.exists("p1").await?);
        assert!(repo.insert(&Player::new("p1", "Alice", "https://img.example/a.png", 42)).await?);
        assert!(repo.exists("p1").await?);

        let player = repo.get_by_id("p1").await?;
        assert_eq!(player, Player::new("p1", "Alice", "https://img.example/a.png", 42));

        drop(repo);
        uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_skips_taken_id() -> Result<()> {
        let provider = provider().await?;
        let uow = provider.begin().await?;
        let repo = uow.players();

        assert!(repo.insert(&Player::new("p1", "Alice", "a.png", 1)).await?);
        assert!(!repo.insert(&Player::new("p1", "Mallory", "m.png", 2)).await?);

        let players = repo.list_all().await?;
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].players_name, "Alice");

        drop(repo);
        uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_update_reports_missing_rows() -> Result<()> {
        let provider = provider().await?;
        let uow = provider.begin().await?;
        let repo = uow.players();

        assert!(!repo.update(&Player::new("ghost", "Nobody", "", 0)).await?);

        repo.insert(&Player::new("p1", "Alice", "a.png", 1)).await?;
        assert!(repo.update(&Player::new("p1", "Alicia", "b.png", 9)).await?);
        assert_eq!(repo.get_by_id("p1").await?, Player::new("p1", "Alicia", "b.png", 9));

        drop(repo);
        uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_list_by_score() -> Result<()> {
        let provider = provider().await?;
        let uow = provider.begin().await?;
        let repo = uow.players();

        repo.insert(&Player::new("a", "A", "a.png", 10)).await?;
        repo.insert(&Player::new("b", "B", "b.png", 50)).await?;
        repo.insert(&Player::new("c", "C", "c.png", 5)).await?;
        repo.insert(&Player::new("d", "D", "d.png", 10)).await?;
        repo.insert(&Player {
            player_id: "e".to_string(),
            players_name: "E".to_string(),
            profile_photo: "e.png".to_string(),
            total_score: None,
        })
        .await?;

        let ids: Vec<String> = repo
            .list_by_score()
            .await?
            .into_iter()
            .map(|p| p.player_id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "d", "c", "e"]);

        drop(repo);
        uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> Result<()> {
        let provider = provider().await?;
        let uow = provider.begin().await?;
        let repo = uow.players();

        repo.insert(&Player::new("p1", "Alice", "a.png", 1)).await?;
        repo.delete("ghost").await?;
        assert_eq!(repo.list_all().await?.len(), 1);

        repo.delete("p1").await?;
        repo.delete("p1").await?;
        assert!(repo.list_all().await?.is_empty());

        match repo.get_by_id("p1").await {
            Err(ApplicationError::Db(DbError::PlayerNotFound(id))) => assert_eq!(id, "p1"),
            other => panic!("Expected PlayerNotFound, got: {:?}", other),
        }

        drop(repo);
        uow.rollback().await?;
        Ok(())
    }
}
