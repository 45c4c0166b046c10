//! Volunteer registrations (sign-ups). Each registration belongs to exactly
//! one opportunity and is removed when that opportunity goes away.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/signup/` | Sign up (opportunity id in body) |
//! | POST | `/signup/{opportunity_id}/` | Sign up for a specific opportunity |
//! | GET | `/volunteers/` | List registrations, newest first |
//! | POST | `/volunteers/{id}/delete/` | Delete a registration |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::RegistrationService;
