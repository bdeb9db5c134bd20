//! Medical Store Inventory - Backend
//!
//! Form-based pages for tracking medications, suppliers, supplier orders and
//! sales over a PostgreSQL schema.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::store_routes())
        .route("/health", get(handlers::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
