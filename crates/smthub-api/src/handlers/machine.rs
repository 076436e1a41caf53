//! Machine handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use smthub_core::error::AppError;
use smthub_core::types::PageResponse;
use smthub_entity::machine::MachineFilter;

use crate::dto::request::{CreateMachineRequest, UpdateMachineRequest};
use crate::dto::response::{ApiResponse, MachineResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, RequireAdmin};
use crate::state::AppState;

/// GET /api/machines
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<MachineFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<MachineResponse>>>, ApiError> {
    let page = state
        .machine_service
        .list(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(MachineResponse::summary))))
}

/// GET /api/machines/{serial}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(serial): Path<String>,
) -> Result<Json<ApiResponse<MachineResponse>>, ApiError> {
    let machine = state.machine_service.get(&serial).await?;
    Ok(Json(ApiResponse::ok(MachineResponse::detail(machine))))
}

/// POST /api/machines
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateMachineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MachineResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let machine = state.machine_service.create(req.into_model()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MachineResponse::detail(machine))),
    ))
}

/// PUT /api/machines/{serial}
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(serial): Path<String>,
    Json(req): Json<UpdateMachineRequest>,
) -> Result<Json<ApiResponse<MachineResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let machine = state.machine_service.update(&serial, req.into_model()?).await?;
    Ok(Json(ApiResponse::ok(MachineResponse::detail(machine))))
}

/// DELETE /api/machines/{serial}
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(serial): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.machine_service.delete(&serial).await?;
    Ok(StatusCode::NO_CONTENT)
}
