//! HTTP handlers for the task board API.
//!
//! Every handler performs a full read of the store, an in-memory operation
//! on the document, and, for mutations, a full rewrite. Each request is an
//! independent read-modify-write transaction over the whole document;
//! overlapping writes race and the last completed rewrite wins.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use super::dto::{CreateTaskRequest, UpdateTaskRequest};
use super::error::ApiErrorResponse;
use crate::domain::Task;
use crate::infrastructure::FileStore;

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Flat-file store holding the whole document.
    pub store: FileStore,
}

impl AppState {
    /// Creates state backed by the given store.
    #[must_use]
    pub const fn new(store: FileStore) -> Self {
        Self { store }
    }
}

// =============================================================================
// Health
// =============================================================================

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the service is up.
    pub status: &'static str,
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Task Handlers
// =============================================================================

/// `GET /api/tasks`
///
/// # Errors
///
/// Returns a 500 [`ApiErrorResponse`] when the store cannot be read.
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, ApiErrorResponse> {
    let document = state.store.load()?;
    Ok(Json(document.tasks))
}

/// `GET /api/tasks/{id}`
///
/// # Errors
///
/// Returns a 404 [`ApiErrorResponse`] when no task has the given id, or a
/// 500 when the store cannot be read.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiErrorResponse> {
    let document = state.store.load()?;
    document
        .find_task(&id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiErrorResponse::not_found)
}

/// `POST /api/tasks`
///
/// Accepts a partial task body; every absent field gets its documented
/// default, including a freshly generated id. There is no validation
/// failure path.
///
/// # Errors
///
/// Returns a 500 [`ApiErrorResponse`] when the store cannot be read or
/// rewritten.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiErrorResponse> {
    let mut document = state.store.load()?;
    let task = request.into_task();
    document.tasks.push(task.clone());
    state.store.save(&document)?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}`
///
/// Shallow merge: only the fields present in the body overwrite the stored
/// task, and `updatedAt` refreshes unless the body supplies one.
///
/// # Errors
///
/// Returns a 404 [`ApiErrorResponse`] when no task has the given id (the
/// stored collection is left untouched), or a 500 on store faults.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiErrorResponse> {
    let mut document = state.store.load()?;
    let Some(task) = document.find_task_mut(&id) else {
        return Err(ApiErrorResponse::not_found());
    };

    request.apply_to(task);
    let updated = task.clone();
    state.store.save(&document)?;

    Ok(Json(updated))
}

/// `DELETE /api/tasks/{id}`
///
/// Removes exactly one record by identity lookup; no cascading effects.
///
/// # Errors
///
/// Returns a 404 [`ApiErrorResponse`] when no task has the given id, or a
/// 500 on store faults.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let mut document = state.store.load()?;
    if !document.remove_task(&id) {
        return Err(ApiErrorResponse::not_found());
    }
    state.store.save(&document)?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Category Handlers
// =============================================================================

/// `GET /api/categories`
///
/// # Errors
///
/// Returns a 500 [`ApiErrorResponse`] when the store cannot be read.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiErrorResponse> {
    let document = state.store.load()?;
    Ok(Json(document.categories))
}
