//! Handlers for the /supervisors endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use advisory_database::{CreateSupervisorRequest, Supervisor, UpdateSupervisorRequest};

use crate::{routes::DeleteResponse, ApiError, AppState};

const NOT_FOUND: &str = "Supervisor not found";

pub async fn create_supervisor(
    State(state): State<AppState>,
    Json(request): Json<CreateSupervisorRequest>,
) -> Result<Json<Supervisor>, ApiError> {
    let supervisor = state.supervisors().create(&request).await?;
    Ok(Json(supervisor))
}

pub async fn list_supervisors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Supervisor>>, ApiError> {
    let supervisors = state.supervisors().find_all().await?;
    Ok(Json(supervisors))
}

pub async fn get_supervisor(
    State(state): State<AppState>,
    Path(supervisor_id): Path<i64>,
) -> Result<Json<Supervisor>, ApiError> {
    let supervisor = state
        .supervisors()
        .find_by_id(supervisor_id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(supervisor))
}

pub async fn update_supervisor(
    State(state): State<AppState>,
    Path(supervisor_id): Path<i64>,
    Json(request): Json<UpdateSupervisorRequest>,
) -> Result<Json<Supervisor>, ApiError> {
    let supervisor = state
        .supervisors()
        .update(supervisor_id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(supervisor))
}

pub async fn delete_supervisor(
    State(state): State<AppState>,
    Path(supervisor_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.supervisors().delete(supervisor_id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }
    Ok(Json(DeleteResponse { ok: true }))
}
