use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{CreateRegistrationDto, RegistrationResponseDto};
use crate::features::registrations::models::RegistrationWithOpportunity;

const SELECT_JOINED: &str = r#"
SELECT r.id, r.name, r.age, r.expertise, r.opportunity_id,
       o.title AS opportunity_title, o.date AS opportunity_date,
       c.name AS category_name,
       r.created_at, r.updated_at
FROM registrations r
JOIN opportunities o ON o.id = r.opportunity_id
JOIN categories c ON c.id = o.category_id"#;

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|d| d.code())
        .is_some_and(|code| code == "23503")
}

/// Service for volunteer registrations
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sign a volunteer up for an opportunity
    pub async fn create(
        &self,
        opportunity_id: Uuid,
        dto: CreateRegistrationDto,
    ) -> Result<RegistrationResponseDto> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO registrations (name, age, expertise, opportunity_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.name.trim())
        .bind(dto.age)
        .bind(dto.expertise.trim())
        .bind(opportunity_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::NotFound("Opportunity not found".to_string())
            } else {
                tracing::error!("Failed to create registration: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Registration created: id={}, opportunity_id={}",
            id,
            opportunity_id
        );
        self.get(id).await
    }

    /// Get a single registration by id
    pub async fn get(&self, id: Uuid) -> Result<RegistrationResponseDto> {
        let row = sqlx::query_as::<_, RegistrationWithOpportunity>(&format!(
            "{} WHERE r.id = $1",
            SELECT_JOINED
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get registration: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(|r| r.into())
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
    }

    /// List registrations, newest first, with an optional cap
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<RegistrationResponseDto>> {
        let mut sql = format!("{} ORDER BY r.created_at DESC", SELECT_JOINED);
        if limit.is_some() {
            sql.push_str(" LIMIT $1");
        }

        let mut query = sqlx::query_as::<_, RegistrationWithOpportunity>(&sql);
        if let Some(limit) = limit {
            query = query.bind(limit);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list registrations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Delete a registration
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete registration: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Registration not found".to_string()));
        }

        tracing::info!("Registration deleted: id={}", id);
        Ok(())
    }
}
