use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// --- Domain/Infrastructure Errors ---

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Image not found with ID: {0}")]
    ImageNotFound(i64),

    #[error("Database backend error: {0}")]
    BackendError(#[from] anyhow::Error), // Wrap Anyhow errors from DB layer
}

// --- Web Layer Error ---

#[derive(Error, Debug)]
pub enum AppError {
    // Input validation / request parsing errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Image not found with ID: {0}")]
    ImageNotFound(i64),
    #[error("Media host is not configured")]
    MediaHostNotConfigured,

    /// Store failure. `message` is the only part the client sees.
    #[error("{message}")]
    RepositoryError {
        message: &'static str,
        #[source]
        source: RepoError,
    },

    // Configuration / Startup errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

impl AppError {
    /// Maps a store error onto the web layer, using `message` as the generic client-facing text.
    pub fn from_repo(message: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::ImageNotFound(id) => AppError::ImageNotFound(id),
            e @ RepoError::BackendError(_) => AppError::RepositoryError { message, source: e },
        }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // 4xx Client Errors
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ImageNotFound(_) => (StatusCode::NOT_FOUND, "Image not found.".to_string()),
            AppError::MediaHostNotConfigured => (
                StatusCode::NOT_FOUND,
                "Media host is not configured.".to_string(),
            ),

            // 5xx Server Errors
            AppError::RepositoryError { message, source } => {
                tracing::error!(error.source = ?source, "Repository error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::ConfigError(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error".to_string())
            }
            AppError::InitError(msg) => {
                tracing::error!("Initialization error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server initialization error".to_string())
            }
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// --- Axum Response Implementation ---

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        // 5xx causes were already logged at error level above.
        tracing::debug!(error.message = %error_message, error.detail = %self, "Responding with error");

        let body = Json(serde_json::json!({ "error": error_message }));
        (status, body).into_response()
    }
}
