// Retail Sales Dashboard - filter a sales table and chart the result

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod models;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use store::SalesStore;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
