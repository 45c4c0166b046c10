use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Category row annotated with its opportunity count
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithCount {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub opportunity_count: i64,
}
