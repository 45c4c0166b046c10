use std::sync::Arc;

use chrono::Utc;

use crate::core::error::Result;
use crate::features::exports::dtos::{ExportPreviewDto, ExportPreviewRowDto, ExportRow};
use crate::features::exports::formatters::{
    attachment_filename, to_csv, to_json, truncate_with_ellipsis, PdfRenderer,
};
use crate::features::opportunities::filter::OpportunityFilter;
use crate::features::opportunities::services::OpportunityService;
use crate::shared::constants::PREVIEW_DESCRIPTION_LIMIT;

/// A finished export, ready to stream back as a download
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Service producing filtered exports and their preview. All three formats
/// consume the same row set from the same filtered, ordered query.
pub struct ExportService {
    opportunities: Arc<OpportunityService>,
    pdf: Arc<PdfRenderer>,
}

impl ExportService {
    pub fn new(opportunities: Arc<OpportunityService>, pdf: Arc<PdfRenderer>) -> Self {
        Self { opportunities, pdf }
    }

    async fn rows(&self, filter: &OpportunityFilter) -> Result<Vec<ExportRow>> {
        let opportunities = self.opportunities.list(filter, None).await?;
        Ok(opportunities.into_iter().map(|o| o.into()).collect())
    }

    /// Summarize what a given filter would export: rows with descriptions
    /// cut to 100 characters, plus record and volunteer totals.
    pub async fn preview(&self, filter: &OpportunityFilter) -> Result<ExportPreviewDto> {
        let rows = self.rows(filter).await?;

        let total_count = rows.len() as i64;
        let total_volunteers = rows.iter().map(|r| r.volunteer_count).sum();

        let opportunities = rows
            .into_iter()
            .map(|r| ExportPreviewRowDto {
                title: r.title,
                category: r.category,
                date: r.date,
                description: truncate_with_ellipsis(&r.description, PREVIEW_DESCRIPTION_LIMIT),
                volunteer_count: r.volunteer_count,
            })
            .collect();

        Ok(ExportPreviewDto {
            opportunities,
            total_count,
            total_volunteers,
        })
    }

    pub async fn export_csv(
        &self,
        filter: &OpportunityFilter,
        filename: Option<&str>,
    ) -> Result<ExportFile> {
        let rows = self.rows(filter).await?;
        let bytes = to_csv(&rows)?;
        tracing::info!("CSV export generated: {} rows", rows.len());

        Ok(ExportFile {
            filename: attachment_filename(filename, "csv"),
            content_type: "text/csv",
            bytes,
        })
    }

    pub async fn export_json(
        &self,
        filter: &OpportunityFilter,
        filename: Option<&str>,
    ) -> Result<ExportFile> {
        let rows = self.rows(filter).await?;
        let bytes = to_json(&rows, Utc::now())?;
        tracing::info!("JSON export generated: {} rows", rows.len());

        Ok(ExportFile {
            filename: attachment_filename(filename, "json"),
            content_type: "application/json",
            bytes,
        })
    }

    pub async fn export_pdf(
        &self,
        filter: &OpportunityFilter,
        filename: Option<&str>,
    ) -> Result<ExportFile> {
        let rows = self.rows(filter).await?;
        let bytes = self.pdf.render(&rows, Utc::now())?;
        tracing::info!("PDF export generated: {} rows", rows.len());

        Ok(ExportFile {
            filename: attachment_filename(filename, "pdf"),
            content_type: "application/pdf",
            bytes,
        })
    }
}
