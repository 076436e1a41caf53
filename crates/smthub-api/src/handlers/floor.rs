//! Floor handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use smthub_core::error::AppError;
use smthub_core::types::PageResponse;
use smthub_entity::floor::{Floor, FloorFilter};
use smthub_entity::line::Line;

use crate::dto::request::{AddLineRequest, CreateFloorRequest, UpdateFloorRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, RequireAdmin};
use crate::state::AppState;

/// GET /api/floors
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<FloorFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Floor>>>, ApiError> {
    let page = state
        .floor_service
        .list(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/floors/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Floor>>, ApiError> {
    let floor = state.floor_service.get(id).await?;
    Ok(Json(ApiResponse::ok(floor)))
}

/// GET /api/floors/{id}/lines
pub async fn lines(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Line>>>, ApiError> {
    let lines = state.floor_service.lines_of(id).await?;
    Ok(Json(ApiResponse::ok(lines)))
}

/// POST /api/floors/{id}/lines
///
/// Creates a line directly under the floor named in the path.
pub async fn add_line(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<AddLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Line>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let line = state.line_service.create(req.into_model(id)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(line))))
}

/// POST /api/floors
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateFloorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Floor>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let floor = state.floor_service.create(req.into_model()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(floor))))
}

/// PUT /api/floors/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFloorRequest>,
) -> Result<Json<ApiResponse<Floor>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let floor = state.floor_service.update(id, req.into_model()).await?;
    Ok(Json(ApiResponse::ok(floor)))
}

/// DELETE /api/floors/{id}
///
/// Fails with 409 when the floor still has lines.
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.floor_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/floors/{id}/cascade
///
/// Removes the floor with all of its lines and machines.
pub async fn cascade_delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.floor_service.cascade_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
