use axum::{
    extract::{Extension, Form},
    response::Response,
};
use std::sync::Arc;

use blockparty_app::{
    app_bus::AppBus, command_handlers::DeletePlayerCommandHandler,
    cqrs::commands::DeletePlayer, normalize::normalize,
};

use crate::{
    handlers::{error_response, html_response},
    views::{render_delete_confirmation, render_delete_form},
};

/// GET /delete – Show the delete form.
pub async fn delete_page() -> Response {
    html_response(render_delete_form())
}

/// POST /delete – Delete a player. Unknown ids succeed as well.
pub async fn delete_player(
    Extension(app_bus): Extension<Arc<AppBus>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    // A repeated `player_id` keeps its first value.
    let player_id = pairs
        .iter()
        .find(|(key, _)| key == "player_id")
        .map(|(_, value)| value.as_str());
    let player_id = normalize(player_id);

    let command = DeletePlayer {
        player_id: player_id.clone(),
    };
    match app_bus
        .execute(command, DeletePlayerCommandHandler::new())
        .await
    {
        Ok(()) => html_response(render_delete_confirmation(&player_id)),
        Err(e) => error_response(e),
    }
}
