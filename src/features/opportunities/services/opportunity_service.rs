use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::opportunities::dtos::{OpportunityResponseDto, SaveOpportunityDto};
use crate::features::opportunities::filter::OpportunityFilter;
use crate::features::opportunities::models::OpportunityWithCategory;

/// Annotated select shared by the listing, detail, and export queries.
/// Ordering is applied by the callers; the registration count is always
/// computed here, never read from a stored column.
const SELECT_ANNOTATED: &str = r#"
SELECT o.id, o.title, o.description, o.date, o.category_id,
       c.name AS category_name, c.slug AS category_slug,
       (SELECT COUNT(*) FROM registrations r WHERE r.opportunity_id = o.id) AS volunteer_count,
       o.created_at, o.updated_at
FROM opportunities o
JOIN categories c ON c.id = o.category_id"#;

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|d| d.code())
        .is_some_and(|code| code == "23503")
}

/// Service for opportunity CRUD and filtered listing
pub struct OpportunityService {
    pool: PgPool,
}

impl OpportunityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List opportunities matching the filter, with their category and
    /// registration count, ordered by date then title. The ordering is
    /// deterministic so listings and exports see the same sequence.
    pub async fn list(
        &self,
        filter: &OpportunityFilter,
        limit: Option<i64>,
    ) -> Result<Vec<OpportunityResponseDto>> {
        let mut qb = QueryBuilder::new(SELECT_ANNOTATED);
        filter.push_where(&mut qb);
        qb.push(" ORDER BY o.date, o.title");
        if let Some(limit) = limit {
            qb.push(" LIMIT ");
            qb.push_bind(limit);
        }

        let rows = qb
            .build_query_as::<OpportunityWithCategory>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list opportunities: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|o| o.into()).collect())
    }

    /// Get a single opportunity by id
    pub async fn get(&self, id: Uuid) -> Result<OpportunityResponseDto> {
        let row = sqlx::query_as::<_, OpportunityWithCategory>(
            r#"
            SELECT o.id, o.title, o.description, o.date, o.category_id,
                   c.name AS category_name, c.slug AS category_slug,
                   (SELECT COUNT(*) FROM registrations r WHERE r.opportunity_id = o.id) AS volunteer_count,
                   o.created_at, o.updated_at
            FROM opportunities o
            JOIN categories c ON c.id = o.category_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get opportunity: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(|o| o.into())
            .ok_or_else(|| AppError::NotFound("Opportunity not found".to_string()))
    }

    /// Create an opportunity from a validated DTO
    pub async fn create(&self, dto: SaveOpportunityDto) -> Result<OpportunityResponseDto> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO opportunities (title, description, date, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.title.trim())
        .bind(dto.description.trim())
        .bind(dto.date)
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::BadRequest("Unknown category".to_string())
            } else {
                tracing::error!("Failed to create opportunity: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Opportunity created: id={}", id);
        self.get(id).await
    }

    /// Replace an opportunity's fields and refresh `updated_at`
    pub async fn update(&self, id: Uuid, dto: SaveOpportunityDto) -> Result<OpportunityResponseDto> {
        let result = sqlx::query(
            r#"
            UPDATE opportunities
            SET title = $1, description = $2, date = $3, category_id = $4, updated_at = NOW()
            WHERE id = $5
            "#,
        )
        .bind(dto.title.trim())
        .bind(dto.description.trim())
        .bind(dto.date)
        .bind(dto.category_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::BadRequest("Unknown category".to_string())
            } else {
                tracing::error!("Failed to update opportunity: {:?}", e);
                AppError::Database(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Opportunity not found".to_string()));
        }

        tracing::info!("Opportunity updated: id={}", id);
        self.get(id).await
    }

    /// Delete an opportunity. Registrations cascade at the database level.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete opportunity: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Opportunity not found".to_string()));
        }

        tracing::info!("Opportunity deleted: id={}", id);
        Ok(())
    }
}
