use crate::api::models::*;
use crate::storage::Todo;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::info;

/// Resolve the path identifier. Negative ids are valid integers that can
/// never match a stored record, so they are reported as missing.
fn todo_id(id: Result<Path<i64>, PathRejection>) -> Result<u64, AppError> {
    let Path(id) = id?;
    u64::try_from(id).map_err(|_| AppError::NotFound("Todo not found".to_string()))
}

pub async fn list_todos_handler(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

pub async fn get_todo_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = todo_id(id)?;

    let store = state.store.read().await;
    let todo = store.get(id)?.clone();

    Ok(Json(todo))
}

pub async fn create_todo_handler(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(payload) = payload?;

    let todo = state.store.write().await.create(payload.into_draft());

    info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Full replacement: fields missing from the body fall back to their defaults
pub async fn update_todo_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = todo_id(id)?;
    let Json(payload) = payload?;

    let todo = state.store.write().await.update(id, payload.into_draft())?;

    info!(id, completed = todo.completed, "Todo updated");

    Ok(Json(todo))
}

pub async fn delete_todo_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = todo_id(id)?;

    state.store.write().await.delete(id)?;

    info!(id, "Todo deleted");

    Ok(Json(DeleteResponse {
        detail: "Todo deleted successfully".to_string(),
    }))
}
