use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::opportunities::dtos::OpportunityResponseDto;
use crate::features::registrations::dtos::RegistrationResponseDto;

/// Per-category opportunity and volunteer counts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryBreakdownDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub opportunity_count: i64,
    pub volunteer_count: i64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_opportunities: i64,
    /// Opportunities dated today or later
    pub upcoming_opportunities: i64,
    pub total_volunteers: i64,
    pub categories: Vec<CategoryBreakdownDto>,
}

/// Full dashboard payload: stats plus the recent lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub stats: DashboardStatsDto,
    /// The 5 soonest upcoming opportunities
    pub recent_opportunities: Vec<OpportunityResponseDto>,
    /// The 5 most recent sign-ups
    pub recent_volunteers: Vec<RegistrationResponseDto>,
}
