use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

use crate::core::error::Result;
use crate::features::exports::dtos::{ExportFilterQuery, ExportPreviewDto, ExportQuery};
use crate::features::exports::services::{ExportFile, ExportService};
use crate::shared::types::ApiResponse;

fn download(file: ExportFile) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, file.content_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
}

/// Preview what the current filter selection would export
#[utoipa::path(
    get,
    path = "/api/export/preview/",
    params(ExportFilterQuery),
    responses(
        (status = 200, description = "Export preview", body = ApiResponse<ExportPreviewDto>),
        (status = 400, description = "Invalid filter parameters", body = ApiResponse<String>),
    ),
    tag = "exports"
)]
pub async fn preview_export(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<ExportFilterQuery>,
) -> Result<Json<ApiResponse<ExportPreviewDto>>> {
    let filter = query.resolve()?;
    let preview = service.preview(&filter).await?;
    Ok(Json(ApiResponse::success(Some(preview), None, None)))
}

/// Download the filtered opportunities as CSV
#[utoipa::path(
    get,
    path = "/export/csv/",
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV download", content_type = "text/csv"),
        (status = 400, description = "Invalid filter parameters", body = ApiResponse<String>),
    ),
    tag = "exports"
)]
pub async fn export_csv(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.resolve()?;
    let file = service.export_csv(&filter, query.filename.as_deref()).await?;
    Ok(download(file))
}

/// Download the filtered opportunities as JSON
#[utoipa::path(
    get,
    path = "/export/json/",
    params(ExportQuery),
    responses(
        (status = 200, description = "JSON download", content_type = "application/json"),
        (status = 400, description = "Invalid filter parameters", body = ApiResponse<String>),
    ),
    tag = "exports"
)]
pub async fn export_json(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.resolve()?;
    let file = service
        .export_json(&filter, query.filename.as_deref())
        .await?;
    Ok(download(file))
}

/// Download the filtered opportunities as a PDF report
#[utoipa::path(
    get,
    path = "/export/pdf/",
    params(ExportQuery),
    responses(
        (status = 200, description = "PDF download", content_type = "application/pdf"),
        (status = 400, description = "Invalid filter parameters", body = ApiResponse<String>),
        (status = 503, description = "PDF rendering unavailable", body = ApiResponse<String>),
    ),
    tag = "exports"
)]
pub async fn export_pdf(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.resolve()?;
    let file = service.export_pdf(&filter, query.filename.as_deref()).await?;
    Ok(download(file))
}
