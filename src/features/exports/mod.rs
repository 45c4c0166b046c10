//! Multi-format export of the filtered opportunity list.
//!
//! All three formatters consume the same ordered row set: one row per
//! opportunity, annotated with its category name and registration count.
//! The preview endpoint returns that row set as structured data so a
//! caller can inspect it before downloading.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/export/preview/` | Truncated preview with summary totals |
//! | GET | `/export/csv/` | CSV download |
//! | GET | `/export/json/` | JSON document download |
//! | GET | `/export/pdf/` | PDF report download (needs fonts on disk) |
//!
//! Shared filters: `categories[]` (repeatable), `date_from`, `date_to`;
//! downloads also take `filename`.

pub mod dtos;
pub mod formatters;
pub mod handlers;
pub mod routes;
pub mod services;

pub use formatters::PdfRenderer;
pub use routes::routes;
pub use services::ExportService;
