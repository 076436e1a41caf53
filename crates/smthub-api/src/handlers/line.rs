//! Line handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use smthub_core::error::AppError;
use smthub_core::types::PageResponse;
use smthub_entity::line::{Line, LineFilter};

use crate::dto::request::{AddMachineRequest, CreateLineRequest, UpdateLineRequest};
use crate::dto::response::{ApiResponse, MachineResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, RequireAdmin};
use crate::state::AppState;

/// GET /api/lines
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<LineFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Line>>>, ApiError> {
    let page = state
        .line_service
        .list(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/lines/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Line>>, ApiError> {
    let line = state.line_service.get(id).await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// GET /api/lines/{id}/machines
pub async fn machines(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MachineResponse>>>, ApiError> {
    let machines = state.line_service.machines_of(id).await?;
    let items = machines.into_iter().map(MachineResponse::summary).collect();
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/lines/{id}/machines
///
/// Registers a machine directly under the line named in the path.
pub async fn add_machine(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<AddMachineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MachineResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let machine = state.machine_service.create(req.into_model(id)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MachineResponse::detail(machine))),
    ))
}

/// POST /api/lines
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Line>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let line = state.line_service.create(req.into_model()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(line))))
}

/// PUT /api/lines/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<ApiResponse<Line>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let line = state.line_service.update(id, req.into_model()).await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// DELETE /api/lines/{id}
///
/// Fails with 409 when the line still has machines.
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.line_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/lines/{id}/cascade
///
/// Removes the line together with its machines.
pub async fn cascade_delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.line_service.cascade_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
