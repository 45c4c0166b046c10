use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::registrations::dtos::{CreateRegistrationDto, RegistrationResponseDto};
use crate::features::registrations::services::RegistrationService;
use crate::shared::types::{ApiResponse, Meta};

fn signup_message(registration: &RegistrationResponseDto) -> String {
    format!(
        "Thank you {}! You have successfully signed up for \"{}\".",
        registration.name, registration.opportunity.title
    )
}

/// Sign up for an opportunity named in the request body
#[utoipa::path(
    post,
    path = "/signup/",
    request_body = CreateRegistrationDto,
    responses(
        (status = 200, description = "Signed up", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "registrations"
)]
pub async fn signup(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<CreateRegistrationDto>,
) -> Result<Json<ApiResponse<RegistrationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let opportunity_id = dto
        .opportunity_id
        .ok_or_else(|| AppError::Validation("opportunity_id: Opportunity is required.".to_string()))?;

    let registration = service.create(opportunity_id, dto).await?;
    let message = signup_message(&registration);
    Ok(Json(ApiResponse::success(
        Some(registration),
        Some(message),
        None,
    )))
}

/// Sign up for the opportunity named in the URL
#[utoipa::path(
    post,
    path = "/signup/{opportunity_id}/",
    params(
        ("opportunity_id" = Uuid, Path, description = "Opportunity to sign up for")
    ),
    request_body = CreateRegistrationDto,
    responses(
        (status = 200, description = "Signed up", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "registrations"
)]
pub async fn signup_for_opportunity(
    State(service): State<Arc<RegistrationService>>,
    Path(opportunity_id): Path<Uuid>,
    AppJson(dto): AppJson<CreateRegistrationDto>,
) -> Result<Json<ApiResponse<RegistrationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let registration = service.create(opportunity_id, dto).await?;
    let message = signup_message(&registration);
    Ok(Json(ApiResponse::success(
        Some(registration),
        Some(message),
        None,
    )))
}

/// List registrations, newest first
#[utoipa::path(
    get,
    path = "/volunteers/",
    responses(
        (status = 200, description = "All registrations", body = ApiResponse<Vec<RegistrationResponseDto>>),
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(service): State<Arc<RegistrationService>>,
) -> Result<Json<ApiResponse<Vec<RegistrationResponseDto>>>> {
    let registrations = service.list(None).await?;
    let total = registrations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(registrations),
        None,
        Some(Meta { total }),
    )))
}

/// Delete a registration
#[utoipa::path(
    post,
    path = "/volunteers/{id}/delete/",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration deleted"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(service): State<Arc<RegistrationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let registration = service.get(id).await?;
    service.delete(id).await?;
    let message = format!(
        "Volunteer registration for \"{}\" deleted successfully!",
        registration.name
    );
    Ok(Json(ApiResponse::success(None, Some(message), None)))
}
