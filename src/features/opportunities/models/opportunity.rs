use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Opportunity row joined with its category and annotated with the number
/// of registrations. `volunteer_count` is computed on read, never stored.
#[derive(Debug, Clone, FromRow)]
pub struct OpportunityWithCategory {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Uuid,
    pub category_name: String,
    pub category_slug: String,
    pub volunteer_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
