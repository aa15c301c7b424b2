//! HTTP Routes
//!
//! - `/` - Dashboard page
//! - `/api/options` - Widget choices and defaults
//! - `/api/charts` - Chart specs for the current filter values
//! - `/api/health` - Health check

pub mod dashboard;
pub mod health;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(dashboard::router(state.clone()))
        .merge(health::router(state))
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
}
