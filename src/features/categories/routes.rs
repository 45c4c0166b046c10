use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories/",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/api/categories/{id}", delete(handlers::delete_category))
        .with_state(service)
}
