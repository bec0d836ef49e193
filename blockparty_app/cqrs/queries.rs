use blockparty_types::common::Player;

use crate::cqrs::Query;

/// All players, highest score first.
pub struct GetLeaderboard;

impl Query for GetLeaderboard {
    type Output = Vec<Player>;
}

/// All players in store order.
pub struct ListPlayers;

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// Checks whether a player id is taken.
pub struct PlayerExists {
    pub player_id: String,
}

impl Query for PlayerExists {
    type Output = bool;
}
