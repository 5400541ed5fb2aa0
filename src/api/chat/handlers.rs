use crate::api::models::*;
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use tracing::info;

/// Echo the query back. No agent sits behind this endpoint yet.
pub async fn chat_handler(
    query: Result<Query<ChatQuery>, QueryRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Query(ChatQuery { query }) = query?;

    info!(query_len = query.len(), "Chat request");

    Ok(Json(ChatResponse {
        response: format!("You asked: '{}'. AI agent integration coming soon!", query),
        note: "AI agent functionality requires proper agent framework setup".to_string(),
    }))
}
