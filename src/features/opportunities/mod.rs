//! Volunteer opportunities: CRUD plus the filtered listing that the export
//! subsystem reuses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/opportunities/` | Filtered listing |
//! | GET | `/opportunities/{id}/` | Opportunity detail |
//! | POST | `/opportunities/add/` | Create |
//! | POST | `/opportunities/{id}/edit/` | Full-record edit |
//! | POST | `/opportunities/{id}/delete/` | Delete (cascades to registrations) |
//! | GET | `/api/opportunities/` | Same listing for API consumers |

pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use filter::OpportunityFilter;
pub use routes::routes;
pub use services::OpportunityService;
