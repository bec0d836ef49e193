use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Player ID already exists.")]
    PlayerAlreadyExists(String),

    #[error("Player not found.")]
    PlayerNotFound(String),

    #[error("Database binding \"blockparty\" is missing!")]
    StoreUnavailable,
}
