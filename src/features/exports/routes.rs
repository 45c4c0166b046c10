use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::exports::handlers;
use crate::features::exports::services::ExportService;

/// Create routes for the exports feature
pub fn routes(service: Arc<ExportService>) -> Router {
    Router::new()
        .route("/api/export/preview/", get(handlers::preview_export))
        .route("/export/csv/", get(handlers::export_csv))
        .route("/export/json/", get(handlers::export_json))
        .route("/export/pdf/", get(handlers::export_pdf))
        .with_state(service)
}
