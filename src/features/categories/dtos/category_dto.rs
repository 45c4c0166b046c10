use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::categories::models::CategoryWithCount;

fn name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Request DTO for creating a category. The slug is derived from the name,
/// never supplied by the caller.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(max = 100, message = "Name must not exceed 100 characters"),
        custom(function = "name_not_blank", message = "Name is required.")
    )]
    pub name: String,
}

/// Response DTO for category, annotated with its opportunity count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub opportunity_count: i64,
}

impl From<CategoryWithCount> for CategoryResponseDto {
    fn from(c: CategoryWithCount) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            opportunity_count: c.opportunity_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let dto = CreateCategoryDto {
            name: "   ".to_string(),
        };
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Name is required."));
    }

    #[test]
    fn test_valid_name_accepted() {
        let dto = CreateCategoryDto {
            name: "Food Prep".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
