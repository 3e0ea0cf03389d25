//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for groups, expenses, balances and summaries
//! - Authentication middleware
//! - Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use splitbook_core::Categorizer;
use splitbook_db::Store;
use splitbook_shared::JwtService;
use splitbook_shared::config::SummaryConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory store.
    pub store: Store,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Expense title categorizer.
    pub categorizer: Arc<Categorizer>,
    /// Group summary settings.
    pub summary: SummaryConfig,
}

impl AppState {
    /// Creates state with the built-in keyword table.
    #[must_use]
    pub fn new(store: Store, jwt_service: JwtService, summary: SummaryConfig) -> Self {
        Self {
            store,
            jwt_service: Arc::new(jwt_service),
            categorizer: Arc::new(Categorizer::default()),
            summary,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
