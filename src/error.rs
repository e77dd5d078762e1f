// HTTP error types rendered as HTML pages
use axum::{http::StatusCode, response::IntoResponse};

use crate::auth::AuthError;
use crate::database::StoreError;
use crate::templates;

/// Request-terminating failures with the status code each one maps to
#[derive(Debug)]
pub enum AppError {
    // 404 Not Found
    NotFound(String),

    // 500 - a lookup the handler expected to succeed came back empty
    RecordNotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RecordNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Client-safe message; internal detail stays in the logs
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(_) => "The requested page was not found.",
            AppError::RecordNotFound(_) | AppError::InternalServerError(_) => {
                "A server error occurred."
            }
            AppError::ServiceUnavailable(_) => "The service is temporarily unavailable. Please try again later.",
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn record_not_found(message: impl Into<String>) -> Self {
        AppError::RecordNotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        AppError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(message.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::not_found(msg),
            StoreError::ConnectionError(msg) => AppError::service_unavailable(msg),
            StoreError::MigrationError(msg) => AppError::service_unavailable(msg),
            StoreError::Conflict(msg) => AppError::internal_server_error(msg),
            StoreError::Sqlx(sqlx_err) => AppError::internal_server_error(sqlx_err.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::internal_server_error(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(detail)
            | AppError::RecordNotFound(detail)
            | AppError::InternalServerError(detail)
            | AppError::ServiceUnavailable(detail) => write!(f, "{}: {}", self.status_code(), detail),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, templates::errors::error_page(status, self.message())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_missing_record_is_a_server_error() {
        let err = AppError::record_not_found("Cat matching query does not exist");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("Cat"));
    }

    #[test]
    fn store_errors_map_to_status() {
        let not_found: AppError = StoreError::NotFound("toy 3".to_string()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let down: AppError = StoreError::ConnectionError("refused".to_string()).into();
        assert_eq!(down.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
