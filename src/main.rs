mod api;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::TodoStore;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting Todo API Server");

    // Optional .env for secrets; absence is fine
    if let Ok(path) = dotenvy::dotenv() {
        info!("📄 Loaded environment from {}", path.display());
    }

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - Permissive CORS: {}", config.cors.permissive);

    let state = AppState::new(TodoStore::new());
    let app = api::router(state.clone(), config.cors.permissive);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /todos        - List todos");
    info!("   POST   /todos        - Create todo");
    info!("   GET    /todos/{{id}}   - Get todo");
    info!("   PUT    /todos/{{id}}   - Replace todo");
    info!("   DELETE /todos/{{id}}   - Delete todo");
    info!("   GET    /chat?query=  - Chat placeholder");
    info!("   GET    /health       - Health check");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let store = state.store.read().await;
    if !store.is_empty() {
        info!(remaining = store.len(), "🗑️  Discarding in-memory todos");
    }

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
