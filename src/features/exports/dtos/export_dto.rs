use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::opportunities::dtos::OpportunityResponseDto;
use crate::features::opportunities::filter::OpportunityFilter;

/// One line of an export: an opportunity with its category name and
/// registration count. Every formatter consumes this same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub volunteer_count: i64,
}

impl From<OpportunityResponseDto> for ExportRow {
    fn from(o: OpportunityResponseDto) -> Self {
        Self {
            title: o.title,
            category: o.category.name,
            date: o.date,
            description: o.description,
            volunteer_count: o.volunteer_count,
        }
    }
}

/// Filter params shared by the preview endpoint. Multiple categories are
/// allowed here, unlike the single-category listing filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExportFilterQuery {
    /// Category ids to include (repeatable); empty means all
    #[serde(default, rename = "categories[]")]
    pub categories: Vec<Uuid>,
    /// Inclusive lower bound on the opportunity date (YYYY-MM-DD)
    pub date_from: Option<String>,
    /// Inclusive upper bound on the opportunity date (YYYY-MM-DD)
    pub date_to: Option<String>,
}

impl ExportFilterQuery {
    pub fn resolve(&self) -> Result<OpportunityFilter> {
        OpportunityFilter::resolve(
            self.categories.clone(),
            self.date_from.as_deref(),
            self.date_to.as_deref(),
            None,
        )
    }
}

/// Filter params for the download endpoints: the preview filters plus the
/// requested base filename.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExportQuery {
    #[serde(default, rename = "categories[]")]
    pub categories: Vec<Uuid>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// Base filename; the format extension is appended when missing
    pub filename: Option<String>,
}

impl ExportQuery {
    pub fn resolve(&self) -> Result<OpportunityFilter> {
        OpportunityFilter::resolve(
            self.categories.clone(),
            self.date_from.as_deref(),
            self.date_to.as_deref(),
            None,
        )
    }
}

/// One preview line; the description is cut to 100 characters
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportPreviewRowDto {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub volunteer_count: i64,
}

/// Preview of a pending export: truncated rows plus summary totals
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportPreviewDto {
    pub opportunities: Vec<ExportPreviewRowDto>,
    pub total_count: i64,
    pub total_volunteers: i64,
}
