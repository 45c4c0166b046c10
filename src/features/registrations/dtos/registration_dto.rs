use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::registrations::models::RegistrationWithOpportunity;

fn name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn expertise_not_blank(expertise: &str) -> Result<(), ValidationError> {
    if expertise.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Request DTO for a volunteer sign-up. `opportunity_id` may instead come
/// from the URL path on the targeted sign-up route.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationDto {
    #[validate(
        length(max = 200, message = "Name must not exceed 200 characters"),
        custom(function = "name_not_blank", message = "Name is required.")
    )]
    pub name: String,

    /// Volunteer age; must be at least 18
    #[validate(range(min = 18, message = "You must be at least 18 years old to volunteer."))]
    pub age: i32,

    #[validate(custom(
        function = "expertise_not_blank",
        message = "Expertise description is required."
    ))]
    pub expertise: String,

    pub opportunity_id: Option<Uuid>,
}

/// Opportunity reference embedded in registration responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpportunityRefDto {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub category_name: String,
}

/// Response DTO for registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub expertise: String,
    pub opportunity: OpportunityRefDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegistrationWithOpportunity> for RegistrationResponseDto {
    fn from(r: RegistrationWithOpportunity) -> Self {
        Self {
            id: r.id,
            name: r.name,
            age: r.age,
            expertise: r.expertise,
            opportunity: OpportunityRefDto {
                id: r.opportunity_id,
                title: r.opportunity_title,
                date: r.opportunity_date,
                category_name: r.category_name,
            },
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateRegistrationDto {
        CreateRegistrationDto {
            name: "Jordan Smith".to_string(),
            age: 25,
            expertise: "First aid certified".to_string(),
            opportunity_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_underage_rejected_with_domain_message() {
        let mut dto = valid_dto();
        dto.age = 17;
        let err = dto.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("You must be at least 18 years old to volunteer."));
    }

    #[test]
    fn test_age_exactly_18_accepted() {
        let mut dto = valid_dto();
        dto.age = 18;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut dto = valid_dto();
        dto.name = " ".to_string();
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Name is required."));
    }

    #[test]
    fn test_blank_expertise_rejected() {
        let mut dto = valid_dto();
        dto.expertise = "\n".to_string();
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Expertise description is required."));
    }
}
