mod get_leaderboard;
mod list_players;
mod player_exists;

pub use get_leaderboard::GetLeaderboardHandler;
pub use list_players::ListPlayersHandler;
pub use player_exists::PlayerExistsHandler;
