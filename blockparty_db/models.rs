use sqlx::FromRow;

use blockparty_types::common;

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub player_id: String,
    pub players_name: String,
    pub profile_photo: String,
    pub total_score: Option<i64>,
}

impl From<Player> for common::Player {
    fn from(row: Player) -> Self {
        common::Player {
            player_id: row.player_id,
            players_name: row.players_name,
            profile_photo: row.profile_photo,
            total_score: row.total_score,
        }
    }
}
