//! Body extractor accepting JSON or URL-encoded form payloads.
//!
//! The login endpoint serves both API clients (JSON) and plain HTML
//! forms, so it sniffs the `Content-Type` and parses accordingly.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use smthub_core::error::AppError;

use crate::error::ApiError;

/// Parses the request body as JSON unless the content type declares a
/// URL-encoded form.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Invalid form body: {e}")))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Invalid JSON body: {e}")))?;
            Ok(Self(value))
        }
    }
}
