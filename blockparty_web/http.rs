use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use blockparty_app::{app_bus::AppBus, config::Config};
use blockparty_types::errors::{AppError, ApplicationError};

use crate::handlers::{
    admin_mutate, admin_page, delete_page, delete_player, leaderboard, not_found,
};

#[derive(Clone)]
pub struct AppState {
    /// `None` when the server booted without a store.
    pub app_bus: Option<Arc<AppBus>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_bus: Option<Arc<AppBus>>, config: Arc<Config>) -> AppState {
        AppState { app_bus, config }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(leaderboard).fallback(not_found))
            .route(
                "/admin",
                get(admin_page).post(admin_mutate).fallback(not_found),
            )
            .route(
                "/delete",
                get(delete_page).post(delete_player).fallback(not_found),
            )
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(state.clone(), require_store))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

/// Rejects every request with a 500 when there is no store, before any
/// route is matched. Otherwise hands the bus to the handlers.
async fn require_store(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    match state.app_bus {
        Some(app_bus) => {
            request.extensions_mut().insert(app_bus);
            next.run(request).await
        }
        None => {
            tracing::error!("Rejecting {} {}: no store configured", request.method(), request.uri());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::StoreUnavailable.to_string(),
            )
                .into_response()
        }
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
