use actix_web::dev::HttpServiceFactory;
use actix_web::{web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::reseller::application::ports::incoming::use_cases::ListResellersError;
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    PageRequest, ResellerPage, DEFAULT_PAGE_SIZE,
};
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

use super::{database_not_configured, list_filter};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListResellersQuery {
    /// `todos` (default), `pendente`, `aprovado` or `rejeitado`
    pub status: Option<String>,
    /// Case-insensitive match on name, business name or city/state
    pub search: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/revendedores/list",
    tag = "resellers",
    params(ListResellersQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "One page of resellers", body = inline(SuccessResponse<ResellerPage>)),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Not configured or database error", body = ErrorResponse)
    )
)]
pub async fn list_resellers_handler(
    _user: AdminUser,
    query: web::Query<ListResellersQuery>,
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
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    if !page.is_addressable() {
        return ApiResponse::bad_request("INVALID_QUERY", "page is out of range");
    }

    match reseller.list.execute(filter, page).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListResellersError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list resellers");
            ApiResponse::internal_error()
        }
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/revendedores/list",
        "GET",
        web::get().to(list_resellers_handler),
    )
}
