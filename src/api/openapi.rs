use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::reseller::adapter::incoming::web::routes::{
    ResellerPatchDto, UpdateResellerRequest,
};
use crate::modules::reseller::application::domain::entities::{
    ResellerRecord, ResellerStatus, SalesChannel, YesNo,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    ResellerPage, ResellerStats,
};
use crate::modules::submission::adapter::incoming::web::routes::ApplicationForm;
use crate::modules::submission::application::domain::entities::{SinkOutcome, SubmissionReport};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Revendedores API",
        version = "1.0.0",
        description = "Reseller applications: public submission and the admin back office",
    ),
    paths(
        // Public
        crate::modules::submission::adapter::incoming::web::routes::submit_application::submit_application_handler,

        // Admin
        crate::modules::reseller::adapter::incoming::web::routes::list_resellers::list_resellers_handler,
        crate::modules::reseller::adapter::incoming::web::routes::update_reseller::update_reseller_handler,
        crate::modules::reseller::adapter::incoming::web::routes::delete_reseller::delete_reseller_handler,
        crate::modules::reseller::adapter::incoming::web::routes::export_resellers::export_resellers_handler,
        crate::modules::reseller::adapter::incoming::web::routes::get_reseller_stats::get_reseller_stats_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SubmissionReport>,
            ErrorResponse,
            ErrorDetail,

            // Submission
            ApplicationForm,
            SubmissionReport,
            SinkOutcome,

            // Resellers
            ResellerRecord,
            ResellerStatus,
            YesNo,
            SalesChannel,
            ResellerPage,
            ResellerStats,
            UpdateResellerRequest,
            ResellerPatchDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "submission", description = "Public reseller application form"),
        (name = "resellers", description = "Reseller administration (bearer token required)"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity service"))
                        .build(),
                ),
            )
        }
    }
}
