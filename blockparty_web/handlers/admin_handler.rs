use axum::{
    extract::{Extension, Form, Query},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use blockparty_app::{
    app_bus::AppBus,
    command_handlers::{AddPlayerCommandHandler, UpdatePlayerCommandHandler},
    cqrs::queries::ListPlayers,
    normalize::normalize,
    player_form::{PlayerForm, PlayerMutation},
    queries_handlers::ListPlayersHandler,
};

use crate::{
    handlers::{error_response, html_response},
    views::render_admin,
};

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub player_id: Option<String>,
}

/// GET /admin – Show the add/update forms, optionally pre-filled.
pub async fn admin_page(
    Extension(app_bus): Extension<Arc<AppBus>>,
    Query(params): Query<AdminQuery>,
) -> Response {
    let players = match app_bus.query(ListPlayers, ListPlayersHandler::new()).await {
        Ok(players) => players,
        Err(e) => {
            tracing::error!("Unable to load players: {}", e);
            return error_response(e);
        }
    };

    let selected_id = normalize(params.player_id.as_deref());
    let selected = players.iter().find(|p| p.player_id == selected_id);

    html_response(render_admin(&players, selected))
}

/// POST /admin – Add a new player or update an existing one.
pub async fn admin_mutate(
    Extension(app_bus): Extension<Arc<AppBus>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form: PlayerForm = pairs.into_iter().collect();
    let result = match form.into_mutation() {
        PlayerMutation::Add(command) => {
            app_bus
                .execute(command, AddPlayerCommandHandler::new())
                .await
        }
        PlayerMutation::Update(command) => {
            app_bus
                .execute(command, UpdatePlayerCommandHandler::new())
                .await
        }
        PlayerMutation::None => Ok(()),
    };

    match result {
        Ok(()) => Redirect::to("/admin").into_response(),
        Err(e) => {
            tracing::warn!("Player mutation rejected: {}", e);
            error_response(e)
        }
    }
}
