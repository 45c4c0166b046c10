use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::opportunities::handlers;
use crate::features::opportunities::services::OpportunityService;

/// Create routes for the opportunities feature. The `/opportunities/`
/// listing and `/api/opportunities/` serve the same filtered data.
pub fn routes(service: Arc<OpportunityService>) -> Router {
    Router::new()
        .route("/opportunities/", get(handlers::list_opportunities))
        .route("/opportunities/add/", post(handlers::create_opportunity))
        .route("/opportunities/{id}/", get(handlers::get_opportunity))
        .route("/opportunities/{id}/edit/", post(handlers::edit_opportunity))
        .route(
            "/opportunities/{id}/delete/",
            post(handlers::delete_opportunity),
        )
        .route("/api/opportunities/", get(handlers::list_opportunities))
        .with_state(service)
}
