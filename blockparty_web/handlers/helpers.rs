use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use blockparty_types::errors::{AppError, ApplicationError};

/// Helper: wrap rendered HTML in a response or return 500 on error
pub fn html_response(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Template render error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
        }
    }
}

/// Maps an application error to the status and body the admin pages expect.
pub fn error_response(err: ApplicationError) -> Response {
    match err {
        ApplicationError::App(e @ AppError::PlayerAlreadyExists(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        ApplicationError::App(e @ AppError::PlayerNotFound(_)) => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        ApplicationError::App(e @ AppError::StoreUnavailable) => {
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        e => {
            tracing::error!("Request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
        }
    }
}

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
