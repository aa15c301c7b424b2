use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::dashboard;
use crate::models::{AppState, ChartsQuery, DashboardCharts, DashboardOptions};
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/options", get(get_options))
        .route("/api/charts", get(get_charts))
        .with_state(state)
}

/// GET /api/options - Dropdown choices, date span and default selections
async fn get_options(State(state): State<AppState>) -> Json<DashboardOptions> {
    Json(dashboard::options(&state.store, &state.config.data))
}

/// GET /api/charts - Bar, line and pie specs for the given filter values
async fn get_charts(
    State(state): State<AppState>,
    Query(query): Query<ChartsQuery>,
) -> AppResult<Json<DashboardCharts>> {
    let criteria = dashboard::resolve_criteria(&state.store, &state.config.data, query)?;
    info!(region = %criteria.region, product = %criteria.product, "Chart request received");

    Ok(Json(dashboard::update_charts(&state.store, criteria)))
}
