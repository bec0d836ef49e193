use async_trait::async_trait;
use std::sync::Arc;

use blockparty_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::PlayerExists},
    normalize::normalize,
    uow::UnitOfWork,
};

pub struct PlayerExistsHandler {}

impl PlayerExistsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<PlayerExists> for PlayerExistsHandler {
    async fn handle(
        &self,
        query: PlayerExists,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<PlayerExists as Query>::Output, ApplicationError> {
        let player_id = normalize(Some(&query.player_id));
        if player_id.is_empty() {
            return Ok(false);
        }

        uow.players().exists(&player_id).await
    }
}

#[cfg(test)]
mod tests {
    use blockparty_types::{Result, common::Player};

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_player_exists() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = PlayerExistsHandler::new();

        mock_uow
            .players()
            .insert(&Player::new("p1", "Alice", "https://img.example/a.png", 1))
            .await?;

        let query = |id: &str| PlayerExists {
            player_id: id.to_string(),
        };
        assert!(handler.handle(query("p1"), &mock_uow, &config).await?);
        assert!(handler.handle(query(" p1 "), &mock_uow, &config).await?);
        assert!(!handler.handle(query("p2"), &mock_uow, &config).await?);
        assert!(!handler.handle(query(""), &mock_uow, &config).await?);

        Ok(())
    }
}
