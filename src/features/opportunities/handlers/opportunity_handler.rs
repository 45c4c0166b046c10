use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::opportunities::dtos::{
    ListOpportunitiesQuery, OpportunityResponseDto, SaveOpportunityDto,
};
use crate::features::opportunities::services::OpportunityService;
use crate::shared::types::{ApiResponse, Meta};

/// List opportunities with optional category/date/search filters
#[utoipa::path(
    get,
    path = "/api/opportunities/",
    params(ListOpportunitiesQuery),
    responses(
        (status = 200, description = "Filtered opportunities, ordered by date then title", body = ApiResponse<Vec<OpportunityResponseDto>>),
        (status = 400, description = "Malformed date filter")
    ),
    tag = "opportunities"
)]
pub async fn list_opportunities(
    State(service): State<Arc<OpportunityService>>,
    Query(query): Query<ListOpportunitiesQuery>,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let filter = query.resolve()?;
    let opportunities = service.list(&filter, None).await?;
    let total = opportunities.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(opportunities),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single opportunity
#[utoipa::path(
    get,
    path = "/opportunities/{id}/",
    params(
        ("id" = Uuid, Path, description = "Opportunity id")
    ),
    responses(
        (status = 200, description = "Opportunity detail", body = ApiResponse<OpportunityResponseDto>),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn get_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OpportunityResponseDto>>> {
    let opportunity = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(opportunity), None, None)))
}

/// Create a new opportunity
#[utoipa::path(
    post,
    path = "/opportunities/add/",
    request_body = SaveOpportunityDto,
    responses(
        (status = 200, description = "Opportunity created", body = ApiResponse<OpportunityResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "opportunities"
)]
pub async fn create_opportunity(
    State(service): State<Arc<OpportunityService>>,
    AppJson(dto): AppJson<SaveOpportunityDto>,
) -> Result<Json<ApiResponse<OpportunityResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let opportunity = service.create(dto).await?;
    let message = format!("Opportunity \"{}\" created successfully!", opportunity.title);
    Ok(Json(ApiResponse::success(
        Some(opportunity),
        Some(message),
        None,
    )))
}

/// Edit an opportunity (full-record replace)
#[utoipa::path(
    post,
    path = "/opportunities/{id}/edit/",
    params(
        ("id" = Uuid, Path, description = "Opportunity id")
    ),
    request_body = SaveOpportunityDto,
    responses(
        (status = 200, description = "Opportunity updated", body = ApiResponse<OpportunityResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn edit_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SaveOpportunityDto>,
) -> Result<Json<ApiResponse<OpportunityResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let opportunity = service.update(id, dto).await?;
    let message = format!("Opportunity \"{}\" updated successfully!", opportunity.title);
    Ok(Json(ApiResponse::success(
        Some(opportunity),
        Some(message),
        None,
    )))
}

/// Delete an opportunity and its registrations
#[utoipa::path(
    post,
    path = "/opportunities/{id}/delete/",
    params(
        ("id" = Uuid, Path, description = "Opportunity id")
    ),
    responses(
        (status = 200, description = "Opportunity deleted"),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn delete_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let opportunity = service.get(id).await?;
    service.delete(id).await?;
    let message = format!("Opportunity \"{}\" deleted successfully!", opportunity.title);
    Ok(Json(ApiResponse::success(None, Some(message), None)))
}
