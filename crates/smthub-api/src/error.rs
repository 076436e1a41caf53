//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use smthub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Response-side wrapper for `AppError`.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts
/// any `AppError` via the `From` impl below.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Maps an error kind to its HTTP status and wire code.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.0.kind);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Internal server error");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let (status, code) = status_for(ErrorKind::Validation);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn authentication_maps_to_unauthorized() {
        let (status, _) = status_for(ErrorKind::Authentication);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn authorization_maps_to_forbidden() {
        let (status, _) = status_for(ErrorKind::Authorization);
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflict_maps_to_409() {
        let (status, code) = status_for(ErrorKind::Conflict);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "CONFLICT");
    }

    #[test]
    fn infrastructure_kinds_map_to_500() {
        for kind in [
            ErrorKind::Internal,
            ErrorKind::Database,
            ErrorKind::Configuration,
            ErrorKind::Serialization,
        ] {
            let (status, _) = status_for(kind);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
