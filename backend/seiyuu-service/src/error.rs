/// Error types for seiyuu-service
///
/// Every failure is terminal for the user action that caused it. Handlers pick
/// the short text the screen shows through [`AppError::reported`]; the original
/// error is logged, never sent to the client.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use anilist_client::AniListError;
use thiserror::Error;

/// Result type for seiyuu-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Relational store operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Staff service unreachable or answered with an error
    #[error("Upstream error: {0}")]
    Upstream(#[from] AniListError),

    /// Local or external validation failed; the message is user-facing
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Screen-level message that replaced an underlying error
    #[error("{message}")]
    Reported { status: u16, message: String },
}

impl AppError {
    /// Replace the error text with the screen's fallback message, keeping the status.
    ///
    /// Validation, not-found and bad-request messages are already meant for the
    /// user and pass through unchanged.
    pub fn reported(self, fallback: &str) -> AppError {
        match self {
            AppError::Validation(_)
            | AppError::NotFound(_)
            | AppError::BadRequest(_)
            | AppError::Reported { .. } => self,
            other => {
                tracing::error!(error = %other, "{}", fallback);
                AppError::Reported {
                    status: other.status_code().as_u16(),
                    message: fallback.to_string(),
                }
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Reported { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
