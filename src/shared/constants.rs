/// Base filename used when an export request omits one (or sends a blank)
pub const DEFAULT_EXPORT_FILENAME: &str = "volunteer_opportunities";

/// Description cutoff in the export preview payload
pub const PREVIEW_DESCRIPTION_LIMIT: usize = 100;

/// Description cutoff inside the PDF report table
pub const PDF_DESCRIPTION_LIMIT: usize = 80;

/// How many recent rows the dashboard shows per list
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;
