use std::sync::Arc;

use blockparty_types::{
    Result,
    common::Player,
    errors::{AppError, ApplicationError},
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AddPlayer},
    uow::UnitOfWork,
};

pub struct AddPlayerCommandHandler {}

impl Default for AddPlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddPlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddPlayer> for AddPlayerCommandHandler {
    async fn handle(
        &self,
        command: AddPlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let player_repo = uow.players();

        tracing::debug!(
            player_id = %command.player_id,
            players_name = %command.players_name,
            profile_photo = %command.profile_photo,
            total_score = command.total_score,
            "Adding player"
        );

        if player_repo.exists(&command.player_id).await? {
            return Err(AppError::PlayerAlreadyExists(command.player_id).into());
        }

        let player: Player = command.into();

        // The insert is conditional too, a concurrent add may win between the two calls.
        if !player_repo.insert(&player).await? {
            return Err(AppError::PlayerAlreadyExists(player.player_id).into());
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

    fn add_command(player_id: &str, total_score: i64) -> AddPlayer {
        AddPlayer {
            player_id: player_id.to_string(),
            players_name: "Alice".to_string(),
            profile_photo: "https://img.example/alice.png".to_string(),
            total_score,
        }
    }

    #[tokio::test]
    async fn test_add_player_success() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = AddPlayerCommandHandler::new();

        assert!(!mock_uow.players().exists("p1").await?);

        handler
            .handle(add_command("p1", 150), &mock_uow, &config)
            .await?;

        assert!(mock_uow.players().exists("p1").await?);
        let saved = mock_uow.players().get_by_id("p1").await?;
        assert_eq!(saved.players_name, "Alice");
        assert_eq!(saved.profile_photo, "https://img.example/alice.png");
        assert_eq!(saved.total_score, Some(150));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_player_twice_is_a_conflict() -> Result<()> {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = AddPlayerCommandHandler::new();

        handler.handle(add_command("p1", 10), &mock_uow, &config).await?;
        let result = handler.handle(add_command("p1", 99), &mock_uow, &config).await;

        match result {
            Err(ApplicationError::App(AppError::PlayerAlreadyExists(id))) => assert_eq!(id, "p1"),
            other => panic!("Expected PlayerAlreadyExists, got: {:?}", other),
        }

        let players = mock_uow.players().list_all().await?;
        assert_eq!(players.len(), 1, "Store should hold exactly one p1");
        assert_eq!(players[0].total_score, Some(10), "First write should survive");

        Ok(())
    }
}
