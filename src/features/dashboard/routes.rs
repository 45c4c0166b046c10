use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/api/dashboard-stats/", get(handlers::get_stats))
        .with_state(service)
}
