// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::application::idea_service::IdeaService;
use crate::infrastructure::config::{load_seed_config, load_server_config};
use crate::infrastructure::memory_repository::InMemoryRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_idea, append_row, delete_idea, edit_cell, get_chart, get_grid, get_mode, health_check,
    list_activity, list_ideas, list_rows, remove_last_row, select_mode,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let server_config = load_server_config()?;
    let seed_rows = load_seed_config()?.into_rows();

    // Create repository (infrastructure layer)
    tracing::info!("Seeding series store with {} rows", seed_rows.len());
    let repository = Arc::new(
        InMemoryRepository::new(seed_rows, server_config.board.activity_limit)
            .with_activity(server_config.activity_entries(chrono::Utc::now())),
    );

    // Create services (application layer)
    let chart_service = ChartService::new(repository.clone());
    let idea_service = IdeaService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        chart_service,
        idea_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/series", get(list_rows))
        .route("/series/rows", post(append_row))
        .route("/series/rows/last", delete(remove_last_row))
        .route("/series/rows/:row/:column", put(edit_cell))
        .route("/grid", get(get_grid))
        .route("/chart", get(get_chart))
        .route("/chart/mode", get(get_mode).put(select_mode))
        .route("/ideas", get(list_ideas).post(add_idea))
        .route("/ideas/:index", delete(delete_idea))
        .route("/activity", get(list_activity))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config.server.bind.parse()?;
    tracing::info!("Starting taskboard-series service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
