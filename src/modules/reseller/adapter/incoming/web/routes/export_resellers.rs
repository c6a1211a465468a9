use actix_web::dev::HttpServiceFactory;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::reseller::application::ports::incoming::use_cases::ExportResellersError;
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

use super::{database_not_configured, list_filter};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportResellersQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/revendedores/export",
    tag = "resellers",
    params(ExportResellersQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Semicolon-separated CSV attachment", content_type = "text/csv; charset=utf-8", body = String),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Not configured or database error", body = ErrorResponse)
    )
)]
pub async fn export_resellers_handler(
    user: AdminUser,
    query: web::Query<ExportResellersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(reseller) = data.reseller.as_ref() else {
        return database_not_configured();
    };

    let query = query.into_inner();
    let filter = match list_filter(query.status.as_deref(), query.search) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match reseller.export.execute(filter).await {
        Ok(export) => {
            info!(rows = export.row_count, admin = %user.user_id, "Reseller export generated");

            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(export.file_name)],
                })
                .body(export.content)
        }

        Err(ExportResellersError::QueryFailed(e)) | Err(ExportResellersError::RenderFailed(e)) => {
            error!(error = %e, "Failed to export resellers");
            ApiResponse::internal_error()
        }
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/revendedores/export",
        "GET",
        web::get().to(export_resellers_handler),
    )
}
