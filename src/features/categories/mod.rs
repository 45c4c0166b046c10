//! Categories for volunteer opportunities.
//!
//! A category owns its opportunities: deleting one cascades to the
//! opportunities underneath it and, transitively, their registrations.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories/` | List categories with opportunity counts |
//! | POST | `/api/categories/` | Create a category (slug derived from name) |
//! | DELETE | `/api/categories/{id}` | Delete a category (cascades) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::CategoryService;
