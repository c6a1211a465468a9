pub mod delete_reseller;
pub mod export_resellers;
pub mod get_reseller_stats;
pub mod list_resellers;
pub mod update_reseller;

pub use delete_reseller::delete_reseller_handler;
pub use export_resellers::export_resellers_handler;
pub use get_reseller_stats::get_reseller_stats_handler;
pub use list_resellers::{list_resellers_handler, ListResellersQuery};
pub use update_reseller::{update_reseller_handler, ResellerPatchDto, UpdateResellerRequest};

use actix_web::{web, HttpResponse};

use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    ResellerListFilter, StatusFilter,
};
use crate::shared::api::ApiResponse;

/// Every admin endpoint of the reseller module.
#[cfg(not(tarpaulin_include))]
pub fn configure(cfg: &mut web::ServiceConfig) {
    // `/{id}` last so it never shadows the fixed paths
    cfg.service(list_resellers::resource())
        .service(update_reseller::resource())
        .service(export_resellers::resource())
        .service(get_reseller_stats::resource())
        .service(delete_reseller::resource());
}

pub(crate) fn database_not_configured() -> HttpResponse {
    tracing::error!("Reseller endpoint called but DATABASE_URL is not configured");
    ApiResponse::configuration_error("Database is not configured")
}

/// Shared `status` + `search` parsing for list and export.
pub(crate) fn list_filter(
    status: Option<&str>,
    search: Option<String>,
) -> Result<ResellerListFilter, HttpResponse> {
    let status = StatusFilter::parse(status.unwrap_or_default()).ok_or_else(|| {
        ApiResponse::bad_request(
            "INVALID_STATUS",
            "status must be one of todos, pendente, aprovado, rejeitado",
        )
    })?;

    Ok(ResellerListFilter::new(status, search))
}
