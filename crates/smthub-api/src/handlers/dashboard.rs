//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DashboardResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardResponse>>, ApiError> {
    let summary = state.dashboard_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary.into())))
}
