//! Student HTTP Routes
//!
//! CRUD handlers for `/api/students/*`. Store calls run on the blocking
//! pool; ids are resolved before the request body is decoded.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::errors::{ApiError, ApiResult};
use super::server::SharedState;
use crate::store::{StoreError, StoreResult, StudentStore};
use crate::student::{Student, StudentId, StudentPayload};

// ==================
// Helper Functions
// ==================

/// Run a store operation on the blocking pool
async fn run_store<T, F>(state: &SharedState, op: F) -> StoreResult<T>
where
    F: FnOnce(&dyn StudentStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|err| StoreError::Backend(format!("store task failed: {err}")))?
}

/// Ids match decimal digits only; anything else names no student.
pub fn parse_student_id(raw: &str) -> ApiResult<StudentId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn lookup(state: &SharedState, raw_id: &str) -> ApiResult<Student> {
    let id = parse_student_id(raw_id)?;
    run_store(state, move |store| store.get_by_id(id))
        .await
        .map_err(ApiError::read)
}

fn decode(body: &[u8]) -> ApiResult<StudentPayload> {
    StudentPayload::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}

// ==================
// Handlers
// ==================

pub async fn list_students(State(state): State<SharedState>) -> ApiResult<Json<Vec<Student>>> {
    let students = run_store(&state, |store| store.list_all())
        .await
        .map_err(ApiError::read)?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    Ok(Json(lookup(&state, &id).await?))
}

pub async fn add_student(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let fields = decode(&body)?.into_new_fields();
    let student = run_store(&state, move |store| store.create(&fields))
        .await
        .map_err(ApiError::save)?;

    info!(id = student.id, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// PATCH: apply only the non-null keys of the body
pub async fn modify_student(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Student>> {
    let current = lookup(&state, &id).await?;
    let fields = decode(&body)?.patch(&current);
    let student = run_store(&state, move |store| store.update(current.id, &fields))
        .await
        .map_err(ApiError::save)?;

    info!(id = student.id, "student modified");
    Ok(Json(student))
}

/// PUT: overwrite every field, missing keys become `""` / `0`
pub async fn change_student(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Student>> {
    let current = lookup(&state, &id).await?;
    let fields = decode(&body)?.replace();
    let student = run_store(&state, move |store| store.update(current.id, &fields))
        .await
        .map_err(ApiError::save)?;

    info!(id = student.id, "student replaced");
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<&'static str> {
    let current = lookup(&state, &id).await?;
    let id = current.id;
    run_store(&state, move |store| store.delete(id))
        .await
        .map_err(ApiError::delete)?;

    info!(id, "student deleted");
    Ok("deleted")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_student_id() {
        assert_eq!(parse_student_id("42").unwrap(), 42);
        assert_eq!(parse_student_id("007").unwrap(), 7);
    }

    #[test]
    fn test_non_digit_ids_are_not_found() {
        for raw in ["", "-1", "+1", "abc", "1.5", " 1", "99999999999999999999"] {
            assert!(
                matches!(parse_student_id(raw), Err(ApiError::NotFound)),
                "{raw:?} should not resolve"
            );
        }
    }
}
