use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::exports::{dtos as exports_dtos, handlers as exports_handlers};
use crate::features::opportunities::{
    dtos as opportunities_dtos, handlers as opportunities_handlers,
};
use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dashboard
        dashboard_handlers::get_dashboard,
        dashboard_handlers::get_stats,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::delete_category,
        // Opportunities
        opportunities_handlers::list_opportunities,
        opportunities_handlers::get_opportunity,
        opportunities_handlers::create_opportunity,
        opportunities_handlers::edit_opportunity,
        opportunities_handlers::delete_opportunity,
        // Registrations
        registrations_handlers::signup,
        registrations_handlers::signup_for_opportunity,
        registrations_handlers::list_registrations,
        registrations_handlers::delete_registration,
        // Exports
        exports_handlers::preview_export,
        exports_handlers::export_csv,
        exports_handlers::export_json,
        exports_handlers::export_pdf,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Opportunities
            opportunities_dtos::SaveOpportunityDto,
            opportunities_dtos::CategoryRefDto,
            opportunities_dtos::OpportunityResponseDto,
            ApiResponse<Vec<opportunities_dtos::OpportunityResponseDto>>,
            ApiResponse<opportunities_dtos::OpportunityResponseDto>,
            // Registrations
            registrations_dtos::CreateRegistrationDto,
            registrations_dtos::OpportunityRefDto,
            registrations_dtos::RegistrationResponseDto,
            ApiResponse<Vec<registrations_dtos::RegistrationResponseDto>>,
            ApiResponse<registrations_dtos::RegistrationResponseDto>,
            // Dashboard
            dashboard_dtos::CategoryBreakdownDto,
            dashboard_dtos::DashboardStatsDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardStatsDto>,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Exports
            exports_dtos::ExportPreviewRowDto,
            exports_dtos::ExportPreviewDto,
            ApiResponse<exports_dtos::ExportPreviewDto>,
        )
    ),
    tags(
        (name = "dashboard", description = "Summary statistics and recent activity"),
        (name = "categories", description = "Opportunity categories"),
        (name = "opportunities", description = "Volunteer opportunity management"),
        (name = "registrations", description = "Volunteer signups"),
        (name = "exports", description = "Filtered multi-format export of opportunities"),
    ),
    info(
        title = "Volunteer Hub API",
        version = "0.1.0",
        description = "API documentation for Volunteer Hub",
    )
)]
pub struct ApiDoc;

/// Overrides the OpenAPI info block with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
