use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{
    CategoryBreakdownDto, DashboardStatsDto, DashboardSummaryDto,
};
use crate::features::opportunities::{OpportunityFilter, OpportunityService};
use crate::features::registrations::RegistrationService;
use crate::shared::constants::DASHBOARD_RECENT_LIMIT;

/// Service for dashboard statistics. Reuses the opportunity and
/// registration services for the recent lists so the ordering and
/// annotations match the rest of the app.
pub struct DashboardService {
    pool: PgPool,
    opportunities: Arc<OpportunityService>,
    registrations: Arc<RegistrationService>,
}

impl DashboardService {
    pub fn new(
        pool: PgPool,
        opportunities: Arc<OpportunityService>,
        registrations: Arc<RegistrationService>,
    ) -> Self {
        Self {
            pool,
            opportunities,
            registrations,
        }
    }

    /// Headline counts plus the per-category breakdown
    pub async fn get_stats(&self) -> Result<DashboardStatsDto> {
        let today = Utc::now().date_naive();

        let total_opportunities =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM opportunities")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count opportunities: {:?}", e);
                    AppError::Database(e)
                })?;

        let upcoming_opportunities =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM opportunities WHERE date >= $1")
                .bind(today)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count upcoming opportunities: {:?}", e);
                    AppError::Database(e)
                })?;

        let total_volunteers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count registrations: {:?}", e);
                AppError::Database(e)
            })?;

        let categories = sqlx::query_as::<_, CategoryBreakdownDto>(
            r#"
            SELECT c.id, c.name, c.slug,
                   COUNT(DISTINCT o.id) AS opportunity_count,
                   COUNT(r.id) AS volunteer_count
            FROM categories c
            LEFT JOIN opportunities o ON o.category_id = c.id
            LEFT JOIN registrations r ON r.opportunity_id = o.id
            GROUP BY c.id, c.name, c.slug
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build category breakdown: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(DashboardStatsDto {
            total_opportunities,
            upcoming_opportunities,
            total_volunteers,
            categories,
        })
    }

    /// Stats plus the recent lists shown on the landing page
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let stats = self.get_stats().await?;

        let today = Utc::now().date_naive();
        let upcoming = OpportunityFilter {
            date_from: Some(today),
            ..Default::default()
        };
        let recent_opportunities = self
            .opportunities
            .list(&upcoming, Some(DASHBOARD_RECENT_LIMIT))
            .await?;
        let recent_volunteers = self.registrations.list(Some(DASHBOARD_RECENT_LIMIT)).await?;

        Ok(DashboardSummaryDto {
            stats,
            recent_opportunities,
            recent_volunteers,
        })
    }
}
