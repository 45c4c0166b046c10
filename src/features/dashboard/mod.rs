//! Dashboard summary: opportunity and volunteer totals, a per-category
//! breakdown, and short "recent" lists.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
