use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Registration row joined with its opportunity and category
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationWithOpportunity {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub expertise: String,
    pub opportunity_id: Uuid,
    pub opportunity_title: String,
    pub opportunity_date: NaiveDate,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
