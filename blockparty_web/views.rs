//! HTML rendering for the leaderboard and admin pages.
//!
//! Every function here is pure: it receives already fetched players and
//! never touches the store. Values coming from stored rows are escaped by
//! the templates.

use askama::Template;

use blockparty_types::common::Player;

use crate::templates::{
    AdminTemplate, DeleteConfirmationTemplate, DeleteFormTemplate, LeaderboardRow,
    LeaderboardTemplate, PlayerOption, SelectedPlayer,
};

/// Renders one row per player, ranked by position in `players`.
/// The caller is responsible for ordering.
pub fn render_leaderboard(players: &[Player], banner_url: &str) -> askama::Result<String> {
    let rows = players
        .iter()
        .enumerate()
        .map(|(idx, player)| LeaderboardRow {
            rank: idx + 1,
            profile_photo: &player.profile_photo,
            players_name: &player.players_name,
            total_score: player
                .total_score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    LeaderboardTemplate { banner_url, rows }.render()
}

/// Renders the add form, the player picker and, when a player is
/// selected, the update form pre-filled with its values.
pub fn render_admin(players: &[Player], selected: Option<&Player>) -> askama::Result<String> {
    let options = players
        .iter()
        .map(|player| PlayerOption {
            player_id: &player.player_id,
            players_name: &player.players_name,
            selected: selected.is_some_and(|s| s.player_id == player.player_id),
        })
        .collect();

    let selected = selected.map(|player| SelectedPlayer {
        player_id: &player.player_id,
        players_name: &player.players_name,
        profile_photo: &player.profile_photo,
        total_score: player.total_score.unwrap_or(0),
    });

    AdminTemplate { options, selected }.render()
}

pub fn render_delete_form() -> askama::Result<String> {
    DeleteFormTemplate {}.render()
}

pub fn render_delete_confirmation(player_id: &str) -> askama::Result<String> {
    DeleteConfirmationTemplate { player_id }.render()
}
