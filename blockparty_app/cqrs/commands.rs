use blockparty_types::common::Player;

use crate::cqrs::Command;

/// Creates a new player. Fails if the id is already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPlayer {
    pub player_id: String,
    pub players_name: String,
    pub profile_photo: String,
    pub total_score: i64,
}

impl Command for AddPlayer {}

impl From<AddPlayer> for Player {
    fn from(cmd: AddPlayer) -> Self {
        Player::new(
            cmd.player_id,
            cmd.players_name,
            cmd.profile_photo,
            cmd.total_score,
        )
    }
}

/// Replaces name, photo and score of an existing player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayer {
    pub player_id: String,
    pub players_name: String,
    pub profile_photo: String,
    pub total_score: i64,
}

impl Command for UpdatePlayer {}

impl From<UpdatePlayer> for Player {
    fn from(cmd: UpdatePlayer) -> Self {
        Player::new(
            cmd.player_id,
            cmd.players_name,
            cmd.profile_photo,
            cmd.total_score,
        )
    }
}

/// Removes a player. Missing ids are not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlayer {
    pub player_id: String,
}

impl Command for DeletePlayer {}
