use blockparty_types::common::Player;
use blockparty_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns true if a player with the given id is stored.
    async fn exists(&self, player_id: &str) -> Result<bool, ApplicationError>;

    /// Returns a player by id.
    async fn get_by_id(&self, player_id: &str) -> Result<Player, ApplicationError>;

    /// Returns all players ordered by score, highest first.
    /// Ties keep insertion order, players without a score come last.
    async fn list_by_score(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns all players in insertion order.
    async fn list_all(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Inserts a player unless the id is taken. Returns whether a row was written.
    async fn insert(&self, player: &Player) -> Result<bool, ApplicationError>;

    /// Updates name, photo and score of the player with the same id.
    /// Returns whether a row matched.
    async fn update(&self, player: &Player) -> Result<bool, ApplicationError>;

    /// Deletes a player by id. Deleting a missing id is a no-op.
    async fn delete(&self, player_id: &str) -> Result<(), ApplicationError>;
}
