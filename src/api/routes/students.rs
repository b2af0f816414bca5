//! Student Routes
//!
//! CRUD endpoints for fitness log entries, mounted under the configured
//! base path (default `/api/v1/student`).
//!
//! - GET /getall - List all entries in insertion order
//! - GET /search/:id - Get a single entry
//! - POST /save - Create an entry
//! - PUT /edit/:id - Replace all six fields of an entry
//! - DELETE /delete/:id - Delete an entry

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::storage::{Student, StudentFields};

/// GET /getall
pub async fn list_students(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Student>>> {
    let students = state.store.list()?;
    Ok(Json(students))
}

/// GET /search/:id
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    let student = state.store.get(&id)?;
    Ok(Json(student))
}

/// POST /save
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StudentFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let Json(fields) = body?;
    fields.validate()?;

    let student = state.store.insert(fields)?;

    tracing::info!(student_id = %student.id, "Created student");

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /edit/:id
///
/// Full replacement: fields missing from the body are stored empty.
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<StudentFields>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let Json(fields) = body?;
    fields.validate()?;

    let student = state.store.update(&id, fields)?;

    tracing::info!(student_id = %id, "Updated student");

    Ok(Json(student))
}

/// DELETE /delete/:id
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&id)?;

    tracing::info!(student_id = %id, "Deleted student");

    Ok(StatusCode::NO_CONTENT)
}
