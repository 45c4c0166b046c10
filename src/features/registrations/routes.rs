use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::registrations::handlers;
use crate::features::registrations::services::RegistrationService;

/// Create routes for the registrations feature
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/signup/", post(handlers::signup))
        .route(
            "/signup/{opportunity_id}/",
            post(handlers::signup_for_opportunity),
        )
        .route("/volunteers/", get(handlers::list_registrations))
        .route(
            "/volunteers/{id}/delete/",
            post(handlers::delete_registration),
        )
        .with_state(service)
}
