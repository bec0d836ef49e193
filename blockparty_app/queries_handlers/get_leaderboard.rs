use async_trait::async_trait;
use std::sync::Arc;

use blockparty_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::GetLeaderboard,
    },
    uow::UnitOfWork,
};

pub struct GetLeaderboardHandler {}

impl GetLeaderboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetLeaderboard> for GetLeaderboardHandler {
    async fn handle(
        &self,
        _query: GetLeaderboard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetLeaderboard as Query>::Output, ApplicationError> {
        uow.players().list_by_score().await
    }
}

#[cfg(test)]
mod tests {
    use blockparty_types::{Result, common::Player};

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_leaderboard_orders_by_score_desc() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let repo = mock_uow.players();

        repo.insert(&Player::new("a", "A", "https://img.example/a.png", 10)).await?;
        repo.insert(&Player::new("b", "B", "https://img.example/b.png", 50)).await?;
        repo.insert(&Player::new("c", "C", "https://img.example/c.png", 5)).await?;

        let leaderboard = GetLeaderboardHandler::new()
            .handle(GetLeaderboard, &mock_uow, &config)
            .await?;

        let ids: Vec<&str> = leaderboard.iter().map(|p| p.player_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        Ok(())
    }
}
