use axum::{
    extract::{Extension, State},
    response::Response,
};
use std::sync::Arc;

use blockparty_app::{
    app_bus::AppBus, cqrs::queries::GetLeaderboard, queries_handlers::GetLeaderboardHandler,
};

use crate::{
    handlers::{error_response, html_response},
    http::AppState,
    views::render_leaderboard,
};

/// GET / - Render the leaderboard page
pub async fn leaderboard(
    State(state): State<AppState>,
    Extension(app_bus): Extension<Arc<AppBus>>,
) -> Response {
    match app_bus
        .query(GetLeaderboard, GetLeaderboardHandler::new())
        .await
    {
        Ok(players) => html_response(render_leaderboard(&players, &state.config.banner_url)),
        Err(e) => {
            tracing::error!("Unable to load leaderboard: {}", e);
            error_response(e)
        }
    }
}
