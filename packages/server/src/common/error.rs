use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unique constraint on `providers.email` (see migrations).
const PROVIDER_EMAIL_CONSTRAINT: &str = "providers_email_key";

/// Errors surfaced by activities and route handlers.
///
/// Every variant maps to exactly one HTTP status; 5xx variants never expose
/// their source to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::Conflict(msg) | ApiError::Validation(msg) => {
                msg.clone()
            }
            ApiError::Database(_) => "Database error occurred".to_string(),
            ApiError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let message = match db_err.constraint() {
                    Some(PROVIDER_EMAIL_CONSTRAINT) => "Email already registered.",
                    _ => "Resource already exists.",
                };
                return ApiError::Conflict(message.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return ApiError::Validation(
                    "provider_id does not reference an existing provider".to_string(),
                );
            }
        }
        ApiError::Database(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Model functions wrap sqlx errors in anyhow; classify them the same way
        match err.downcast::<sqlx::Error>() {
            Ok(db_err) => ApiError::from(db_err),
            Err(other) => ApiError::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::not_found("Provider not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Provider not found");
    }

    #[test]
    fn conflict_and_validation_map_to_400() {
        assert_eq!(
            ApiError::Conflict("Email already registered.".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::validation("bad email").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn server_errors_hide_internal_detail() {
        let err = ApiError::from(anyhow::anyhow!("connection refused on 10.0.0.3"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "An unexpected error occurred");

        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Database error occurred");
    }

    #[test]
    fn anyhow_wrapped_sqlx_error_is_classified_as_database() {
        let err = anyhow::Error::new(sqlx::Error::PoolClosed).context("Failed to load provider");
        assert!(matches!(ApiError::from(err), ApiError::Database(_)));
    }
}
