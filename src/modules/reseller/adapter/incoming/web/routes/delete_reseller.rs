use actix_web::dev::HttpServiceFactory;
use actix_web::{web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::reseller::application::ports::incoming::use_cases::DeleteResellerError;
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

use super::database_not_configured;

#[utoipa::path(
    delete,
    path = "/api/revendedores/{id}",
    tag = "resellers",
    params(("id" = i64, Path, description = "Reseller id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Reseller deleted", example = json!({ "success": true })),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "Not configured or database error", body = ErrorResponse)
    )
)]
pub async fn delete_reseller_handler(
    user: AdminUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(reseller) = data.reseller.as_ref() else {
        return database_not_configured();
    };

    let id = path.into_inner();

    match reseller.delete.execute(id).await {
        Ok(()) => {
            info!(reseller_id = id, admin = %user.user_id, "Reseller deleted");
            ApiResponse::ok()
        }

        Err(DeleteResellerError::NotFound) => {
            ApiResponse::not_found("RESELLER_NOT_FOUND", "Reseller not found")
        }

        Err(DeleteResellerError::RepositoryError(e)) => {
            error!(reseller_id = id, error = %e, "Failed to delete reseller");
            ApiResponse::internal_error()
        }
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/revendedores/{id}",
        "DELETE",
        web::delete().to(delete_reseller_handler),
    )
}
