use std::sync::Arc;

use blockparty_types::{
    Result,
    common::Player,
    errors::{AppError, ApplicationError},
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let player_repo = uow.players();

        tracing::debug!(
            player_id = %command.player_id,
            players_name = %command.players_name,
            profile_photo = %command.profile_photo,
            total_score = command.total_score,
            "Updating player"
        );

        if !player_repo.exists(&command.player_id).await? {
            return Err(AppError::PlayerNotFound(command.player_id).into());
        }

        let player: Player = command.into();
        if !player_repo.update(&player).await? {
            return Err(AppError::PlayerNotFound(player.player_id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blockparty_types::Result;

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_update_player_keeps_id() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = UpdatePlayerCommandHandler::new();

        mock_uow
            .players()
            .insert(&Player::new("p1", "Alice", "https://img.example/a.png", 10))
            .await?;

        let command = UpdatePlayer {
            player_id: "p1".to_string(),
            players_name: "Alicia".to_string(),
            profile_photo: "https://img.example/alicia.png".to_string(),
            total_score: 500,
        };
        handler.handle(command, &mock_uow, &config).await?;

        let players = mock_uow.players().list_all().await?;
        assert_eq!(players.len(), 1);
        assert_eq!(
            players[0],
            Player::new("p1", "Alicia", "https://img.example/alicia.png", 500)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_player_fails() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = UpdatePlayerCommandHandler::new();

        let command = UpdatePlayer {
            player_id: "ghost".to_string(),
            players_name: "Nobody".to_string(),
            profile_photo: String::new(),
            total_score: 1,
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        match result {
            Err(ApplicationError::App(AppError::PlayerNotFound(id))) => assert_eq!(id, "ghost"),
            other => panic!("Expected PlayerNotFound, got: {:?}", other),
        }
        assert!(mock_uow.players().list_all().await?.is_empty());

        Ok(())
    }
}
