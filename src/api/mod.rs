pub mod chat;
pub mod models;
pub mod todo;

// Re-exports
pub use models::*;

use axum::{Json, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble every route over one shared state.
///
/// With `permissive_cors` any origin, method and header is allowed, which is
/// only suitable for local development.
pub fn router(state: AppState, permissive_cors: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(todo::routes())
        .merge(chat::routes())
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

// Health handler (simple, keep here)
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Todo API is running".to_string(),
    })
}
