use crate::storage::{StoreError, TodoDraft, TodoStore};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Body of create and update requests.
///
/// `id` is accepted so clients can send a record back as they received it,
/// but the server never takes it: creation assigns a fresh one and update
/// uses the path.
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoPayload {
    /// Drop the client identifier and hand the fields to the store
    pub fn into_draft(self) -> TodoDraft {
        if let Some(id) = self.id {
            debug!(ignored_id = id, "Ignoring client-supplied todo id");
        }

        TodoDraft {
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// Acknowledgment for a deleted todo
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
}

/// Query string of the chat endpoint
#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub note: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound("Todo not found".to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => {
                warn!(reason = %msg, "Rejected request");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            detail,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_optional_fields() {
        let payload: TodoPayload = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        let draft = payload.into_draft();

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, None);
        assert!(!draft.completed);
    }

    #[test]
    fn payload_ignores_unknown_fields_and_client_id() {
        let payload: TodoPayload = serde_json::from_str(
            r#"{"id":41,"title":"t","description":"d","completed":true,"priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(payload.id, Some(41));

        let draft = payload.into_draft();
        assert_eq!(draft.description.as_deref(), Some("d"));
        assert!(draft.completed);
    }

    #[test]
    fn payload_requires_title() {
        assert!(serde_json::from_str::<TodoPayload>(r#"{"completed":true}"#).is_err());
        assert!(serde_json::from_str::<TodoPayload>(r#"{"title":null}"#).is_err());
    }

    #[test]
    fn payload_completed_must_be_a_bool() {
        for body in [
            r#"{"title":"x","completed":"yes"}"#,
            r#"{"title":"x","completed":"true"}"#,
            r#"{"title":"x","completed":1}"#,
        ] {
            assert!(serde_json::from_str::<TodoPayload>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn payload_accepts_negative_client_id() {
        let payload: TodoPayload = serde_json::from_str(r#"{"id":-1,"title":"x"}"#).unwrap();
        assert_eq!(payload.id, Some(-1));
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let response = AppError::from(StoreError::NotFound(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = AppError::Validation("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
