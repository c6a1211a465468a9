use actix_web::dev::HttpServiceFactory;
use actix_web::{web, Responder};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::reseller::application::domain::entities::{
    ResellerStatus, SalesChannel, YesNo,
};
use crate::modules::reseller::application::ports::incoming::use_cases::UpdateResellerError;
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    PatchField, PatchResellerData,
};
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

use super::database_not_configured;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Column-named partial update. Omitted fields are kept, `null` clears an
/// optional field. Server-managed columns are rejected as unknown fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ResellerPatchDto {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub nome_completo: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub empresa_loja: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub cnpj: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub cidade_estado: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub telefone_whatsapp: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub instagram_redes: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub tempo_mercado: PatchField<String>,

    #[serde(
        default,
        deserialize_with = "blank_as_null",
        skip_serializing_if = "PatchField::is_unset"
    )]
    #[schema(value_type = Option<YesNo>)]
    pub entende_proposito: PatchField<YesNo>,

    #[serde(
        default,
        deserialize_with = "blank_as_null",
        skip_serializing_if = "PatchField::is_unset"
    )]
    #[schema(value_type = Option<YesNo>)]
    pub vende_calcados_vestuario: PatchField<YesNo>,

    #[serde(
        default,
        deserialize_with = "blank_as_null",
        skip_serializing_if = "PatchField::is_unset"
    )]
    #[schema(value_type = Option<SalesChannel>)]
    pub forma_venda: PatchField<SalesChannel>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub o_que_chamou_atencao: PatchField<String>,

    #[serde(
        default,
        deserialize_with = "blank_as_null",
        skip_serializing_if = "PatchField::is_unset"
    )]
    #[schema(value_type = Option<YesNo>)]
    pub segue_padroes_marca: PatchField<YesNo>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub pares_por_mes: PatchField<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResellerStatus>,
}

/// The edit form sends `""` for an unanswered question; that clears the answer.
fn blank_as_null<'de, D, T>(deserializer: D) -> Result<PatchField<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(PatchField::Null),
        Some(value) => T::deserialize(value.into_deserializer()).map(PatchField::Value),
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateResellerRequest {
    #[schema(example = 42)]
    pub id: i64,
    pub data: ResellerPatchDto,
}

impl From<ResellerPatchDto> for PatchResellerData {
    fn from(dto: ResellerPatchDto) -> Self {
        PatchResellerData {
            full_name: dto.nome_completo,
            business_name: dto.empresa_loja,
            tax_id: dto.cnpj,
            city_state: dto.cidade_estado,
            phone: dto.telefone_whatsapp,
            email: dto.email,
            social_handle: dto.instagram_redes,
            years_in_market: dto.tempo_mercado,
            understands_purpose: dto.entende_proposito,
            sells_footwear_apparel: dto.vende_calcados_vestuario,
            sales_channel: dto.forma_venda,
            brand_attraction: dto.o_que_chamou_atencao,
            follows_brand_standards: dto.segue_padroes_marca,
            monthly_volume: dto.pares_por_mes,
            status: dto.status,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/revendedores/update",
    tag = "resellers",
    request_body = UpdateResellerRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Reseller updated", example = json!({ "success": true })),
        (status = 400, description = "Invalid body or field value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "Not configured or database error", body = ErrorResponse)
    )
)]
pub async fn update_reseller_handler(
    user: AdminUser,
    req: web::Json<UpdateResellerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(reseller) = data.reseller.as_ref() else {
        return database_not_configured();
    };

    let UpdateResellerRequest { id, data: patch } = req.into_inner();
    let new_status = patch.status;

    match reseller.update.execute(id, patch.into()).await {
        Ok(()) => {
            info!(reseller_id = id, admin = %user.user_id, status = ?new_status, "Reseller updated");
            ApiResponse::ok()
        }

        Err(UpdateResellerError::Validation(message)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }

        Err(UpdateResellerError::NotFound) => {
            ApiResponse::not_found("RESELLER_NOT_FOUND", "Reseller not found")
        }

        Err(UpdateResellerError::RepositoryError(e)) => {
            error!(reseller_id = id, error = %e, "Failed to update reseller");
            ApiResponse::internal_error()
        }
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/revendedores/update",
        "POST",
        web::post().to(update_reseller_handler),
    )
}
