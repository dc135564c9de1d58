//! Card Portfolio Service - Main Application Entry Point
//!
//! A REST API that stores the credit card accounts extracted from a user's
//! credit report and turns them into a dashboard report: totals and
//! utilization, 5/24 eligibility, annual fees, credit age, and issuer mix.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (record store only)
//! - **Analytics**: Pure synchronous engine in `analytics`, no I/O
//! - **Authentication**: API key with SHA-256 hashing, scoped per user
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod analytics;
mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    let rules = config.analytics_rules();
    tracing::info!(?rules, "Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = build_router(AppState { pool, rules });

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble every route with its middleware.
fn build_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        // Record store
        .route(
            "/api/v1/credit-cards",
            get(handlers::credit_cards::list_cards)
                .post(handlers::credit_cards::create_cards)
                .delete(handlers::credit_cards::clear_cards),
        )
        .route(
            "/api/v1/credit-cards/{id}",
            delete(handlers::credit_cards::delete_card),
        )
        // Analytics
        .route(
            "/api/v1/dashboard-stats",
            get(handlers::portfolio::dashboard_stats),
        )
        .route(
            "/api/v1/portfolio/analyze",
            post(handlers::portfolio::analyze_records),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
