//! Handlers for the /students endpoints.
//!
//! Stateless translation only: deserialize, call the repository, map the
//! absence sentinel to 404. All decisions live in the repository layer.

use axum::{
    extract::{Path, State},
    Json,
};

use advisory_database::{CreateStudentRequest, Student, UpdateStudentRequest};

use crate::{routes::DeleteResponse, ApiError, AppState};

const NOT_FOUND: &str = "Student not found";

pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    let student = state.students().create(&request).await?;
    Ok(Json(student))
}

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.students().find_all().await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let student = state
        .students()
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(student))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    let student = state
        .students()
        .update(student_id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.students().delete(student_id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }
    Ok(Json(DeleteResponse { ok: true }))
}
