use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::CategoryWithCount;
use crate::shared::validation::{slugify, SLUG_REGEX};

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|d| d.code())
        .is_some_and(|code| code == "23505")
}

/// Derive the slug from a trimmed name. A name made entirely of symbols
/// slugifies to an empty string, which must never reach the database.
fn derive_slug(name: &str) -> Result<String> {
    let slug = slugify(name);
    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::Validation(
            "Name must contain at least one letter or number.".to_string(),
        ));
    }
    Ok(slug)
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories with their opportunity counts, ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, CategoryWithCount>(
            r#"
            SELECT c.id, c.name, c.slug, c.created_at, COUNT(o.id) AS opportunity_count
            FROM categories c
            LEFT JOIN opportunities o ON o.category_id = c.id
            GROUP BY c.id, c.name, c.slug, c.created_at
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a category, deriving the slug from the trimmed name
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let name = dto.name.trim().to_string();
        let slug = derive_slug(&name)?;

        let category = sqlx::query_as::<_, CategoryWithCount>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at, 0::BIGINT AS opportunity_count
            "#,
        )
        .bind(&name)
        .bind(&slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("Category '{}' already exists", name))
            } else {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Category created: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }

    /// Delete a category. The database cascades to its opportunities and
    /// their registrations.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug_from_name() {
        assert_eq!(derive_slug("Food Prep").unwrap(), "food-prep");
        assert_eq!(derive_slug("Tutoring").unwrap(), "tutoring");
    }

    #[test]
    fn test_symbol_only_name_rejected_before_insert() {
        let err = derive_slug("!!!").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err
            .to_string()
            .contains("Name must contain at least one letter or number."));
    }
}
