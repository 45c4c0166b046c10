use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::opportunities::filter::OpportunityFilter;
use crate::features::opportunities::models::OpportunityWithCategory;

fn title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn description_not_blank(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Request DTO for creating or editing an opportunity. Edits are full-record
/// replaces; there is no partial patch.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveOpportunityDto {
    #[validate(
        length(max = 200, message = "Title must not exceed 200 characters"),
        custom(function = "title_not_blank", message = "Title is required.")
    )]
    pub title: String,

    #[validate(custom(function = "description_not_blank", message = "Description is required."))]
    pub description: String,

    /// Calendar date of the opportunity (YYYY-MM-DD)
    pub date: NaiveDate,

    pub category_id: Uuid,
}

/// Category reference embedded in opportunity responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Response DTO for opportunity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpportunityResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub category: CategoryRefDto,
    pub volunteer_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OpportunityWithCategory> for OpportunityResponseDto {
    fn from(o: OpportunityWithCategory) -> Self {
        Self {
            id: o.id,
            title: o.title,
            description: o.description,
            date: o.date,
            category: CategoryRefDto {
                id: o.category_id,
                name: o.category_name,
                slug: o.category_slug,
            },
            volunteer_count: o.volunteer_count,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Query params for the listing view and `/api/opportunities/`.
///
/// Takes at most one `category`; the export endpoints accept a repeatable
/// `categories[]` instead. The asymmetry mirrors the two use cases and is
/// intentional.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListOpportunitiesQuery {
    /// Category id to filter by
    pub category: Option<Uuid>,
    /// Inclusive lower bound on the opportunity date (YYYY-MM-DD)
    pub date_from: Option<String>,
    /// Inclusive upper bound on the opportunity date (YYYY-MM-DD)
    pub date_to: Option<String>,
    /// Case-insensitive substring match on title or description
    pub search: Option<String>,
}

impl ListOpportunitiesQuery {
    pub fn resolve(&self) -> crate::core::error::Result<OpportunityFilter> {
        OpportunityFilter::resolve(
            self.category.into_iter().collect(),
            self.date_from.as_deref(),
            self.date_to.as_deref(),
            self.search.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> SaveOpportunityDto {
        SaveOpportunityDto {
            title: "Math Tutoring".to_string(),
            description: "Help students with algebra".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let mut dto = valid_dto();
        dto.title = "   ".to_string();
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Title is required."));
    }

    #[test]
    fn test_whitespace_description_rejected() {
        let mut dto = valid_dto();
        dto.description = "\t\n".to_string();
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Description is required."));
    }

    #[test]
    fn test_listing_query_resolves_single_category() {
        let id = Uuid::new_v4();
        let query = ListOpportunitiesQuery {
            category: Some(id),
            ..Default::default()
        };
        let filter = query.resolve().unwrap();
        assert_eq!(filter.categories, vec![id]);
    }

    #[test]
    fn test_listing_query_rejects_bad_date() {
        let query = ListOpportunitiesQuery {
            date_from: Some("not-a-date".to_string()),
            ..Default::default()
        };
        assert!(query.resolve().is_err());
    }
}
