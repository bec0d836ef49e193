use serde::{Deserialize, Serialize};

/// Highest score a player can hold. Anything above is capped on write.
pub const MAX_TOTAL_SCORE: i64 = 999_999;

/// A ranked player, one row per entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub players_name: String,
    pub profile_photo: String,
    /// `None` only for rows that were written without a score.
    pub total_score: Option<i64>,
}

impl Player {
    pub fn new(
        player_id: impl Into<String>,
        players_name: impl Into<String>,
        profile_photo: impl Into<String>,
        total_score: i64,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            players_name: players_name.into(),
            profile_photo: profile_photo.into(),
            total_score: Some(total_score),
        }
    }
}
