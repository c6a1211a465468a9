use actix_web::dev::HttpServiceFactory;
use actix_web::{web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::reseller::application::ports::incoming::use_cases::GetResellerStatsError;
use crate::modules::reseller::application::ports::outgoing::reseller_query::ResellerStats;
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

use super::database_not_configured;

#[utoipa::path(
    get,
    path = "/api/revendedores/stats",
    tag = "resellers",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Counts per status and total monthly volume", body = inline(SuccessResponse<ResellerStats>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Not configured or database error", body = ErrorResponse)
    )
)]
pub async fn get_reseller_stats_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(reseller) = data.reseller.as_ref() else {
        return database_not_configured();
    };

    match reseller.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetResellerStatsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to compute reseller stats");
            ApiResponse::internal_error()
        }
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/revendedores/stats",
        "GET",
        web::get().to(get_reseller_stats_handler),
    )
}
