//! Handlers for the to-do endpoints.
//!
//! Records are returned bare (no envelope) in the `{id, description, status}`
//! shape.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_db::models::todo::TodoInput;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/todo
///
/// List every record.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.todo_service.find_all().await?;

    Ok(Json(todos))
}

/// GET /api/todo/{id}
///
/// Retrieve a single record. Returns 404 if it does not exist.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todo_service.find_by_id(&id).await?;

    Ok(Json(todo))
}

/// POST /api/todo
///
/// Create a record under a generated id.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todo_service.add(input).await?;

    Ok(Json(todo))
}

/// PUT /api/todo/{id}
///
/// Store the record under the path id, creating it if absent. An `id` in the
/// body is ignored.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TodoInput>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todo_service.update(&id, input).await?;

    Ok(Json(todo))
}

/// DELETE /api/todo/{id}
///
/// Delete a record. Deleting an unknown id also returns 200.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.todo_service.delete(&id).await?;

    Ok(StatusCode::OK)
}

/// Record id that shares its path with the seed route.
const INITIALIZE_ID: &str = "initialize";

/// PUT /api/todo/initialize
///
/// `update_todo` for the record whose id is `initialize`.
pub async fn update_initialize_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> AppResult<impl IntoResponse> {
    update_todo(State(state), Path(INITIALIZE_ID.to_string()), Json(input)).await
}

/// DELETE /api/todo/initialize
///
/// `delete_todo` for the record whose id is `initialize`.
pub async fn delete_initialize_todo(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    delete_todo(State(state), Path(INITIALIZE_ID.to_string())).await
}

/// GET /api/todo/initialize
///
/// Generate and store a seed list. Responds with an empty 200.
pub async fn initialize_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let created = state.todo_service.generate_seed_list().await?;

    tracing::info!(count = created.len(), "Todo list initialized");

    Ok(StatusCode::OK)
}
