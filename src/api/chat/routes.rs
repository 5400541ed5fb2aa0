use crate::api::chat::handlers::chat_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", get(chat_handler))
}
