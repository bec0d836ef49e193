#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use blockparty_types::{
        common::Player,
        errors::{ApplicationError, DbError},
    };

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory player store. The backing `Vec` keeps insertion order,
    /// which stands in for the store's natural row order.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<Vec<Player>>>,
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn exists(&self, player_id: &str) -> Result<bool, ApplicationError> {
            let players = self.players.lock().unwrap();
            Ok(players.iter().any(|p| p.player_id == player_id))
        }

        async fn get_by_id(&self, player_id: &str) -> Result<Player, ApplicationError> {
            let players = self.players.lock().unwrap();
            players
                .iter()
                .find(|p| p.player_id == player_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id.to_string())))
        }

        async fn list_by_score(&self) -> Result<Vec<Player>, ApplicationError> {
            let mut players = self.players.lock().unwrap().clone();
            // Stable sort, `None` orders below any score.
            players.sort_by(|a, b| b.total_score.cmp(&a.total_score));
            Ok(players)
        }

        async fn list_all(&self) -> Result<Vec<Player>, ApplicationError> {
            Ok(self.players.lock().unwrap().clone())
        }

        async fn insert(&self, player: &Player) -> Result<bool, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            if players.iter().any(|p| p.player_id == player.player_id) {
                return Ok(false);
            }
            players.push(player.clone());
            Ok(true)
        }

        async fn update(&self, player: &Player) -> Result<bool, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            match players.iter_mut().find(|p| p.player_id == player.player_id) {
                Some(existing) => {
                    existing.players_name = player.players_name.clone();
                    existing.profile_photo = player.profile_photo.clone();
                    existing.total_score = player.total_score;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, player_id: &str) -> Result<(), ApplicationError> {
            self.players
                .lock()
                .unwrap()
                .retain(|p| p.player_id != player_id);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        players: MockPlayerRepository,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            Arc::new(self.players.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Hands out units of work that all share the same in-memory store.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            let provider = Self::default();
            *provider.uow.players.players.lock().unwrap() = players;
            provider
        }

        pub fn players(&self) -> Vec<Player> {
            self.uow.players.players.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(self.uow.clone()))
        }
    }
}
