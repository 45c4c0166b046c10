mod dashboard_dto;

pub use dashboard_dto::{CategoryBreakdownDto, DashboardStatsDto, DashboardSummaryDto};
