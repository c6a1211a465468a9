use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{web, Responder};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::reseller::application::domain::entities::{SalesChannel, YesNo};
use crate::modules::submission::application::domain::entities::{
    ApplicationInput, SubmissionReport,
};
use crate::modules::submission::application::ports::incoming::use_cases::SubmitApplicationError;
use crate::shared::api::{api_resource, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// The public application form. Every field is optional on the wire so that
/// missing required fields produce one message listing all of them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    #[schema(example = "Maria Silva")]
    pub nome_completo: Option<String>,
    pub empresa_loja: Option<String>,
    pub cnpj: Option<String>,
    #[schema(example = "São Paulo, SP")]
    pub cidade_estado: Option<String>,
    #[schema(example = "11999998888")]
    pub telefone_whatsapp: Option<String>,
    pub email: Option<String>,
    pub instagram_redes: Option<String>,
    pub tempo_mercado: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub entende_proposito: Option<YesNo>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub vende_calcados_vestuario: Option<YesNo>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub forma_venda: Option<SalesChannel>,
    pub o_que_chamou_atencao: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub segue_padroes_marca: Option<YesNo>,
    pub pares_por_mes: Option<String>,
}

/// Unselected radio buttons arrive as `""`; treat them like a missing answer.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer()).map(Some),
    }
}

impl From<ApplicationForm> for ApplicationInput {
    fn from(form: ApplicationForm) -> Self {
        ApplicationInput {
            full_name: form.nome_completo,
            business_name: form.empresa_loja,
            tax_id: form.cnpj,
            city_state: form.cidade_estado,
            phone: form.telefone_whatsapp,
            email: form.email,
            social_handle: form.instagram_redes,
            years_in_market: form.tempo_mercado,
            understands_purpose: form.entende_proposito,
            sells_footwear_apparel: form.vende_calcados_vestuario,
            sales_channel: form.forma_venda,
            brand_attraction: form.o_que_chamou_atencao,
            follows_brand_standards: form.segue_padroes_marca,
            monthly_volume: form.pares_por_mes,
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
    path = "/api/submit-revendedor",
    tag = "submission",
    request_body = ApplicationForm,
    responses(
        (
            status = 200,
            description = "Stored by at least one destination",
            body = inline(SuccessResponse<SubmissionReport>),
            example = json!({
                "success": true,
                "data": {
                    "store": { "status": "written" },
                    "crm": { "status": "failed", "reason": "CRM unreachable: timed out" },
                    "resellerId": 42
                }
            })
        ),
        (status = 400, description = "Missing required fields or malformed body", body = ErrorResponse),
        (status = 500, description = "No destination configured", body = ErrorResponse),
        (status = 502, description = "Every configured destination failed", body = ErrorResponse)
    )
)]
pub async fn submit_application_handler(
    req: web::Json<ApplicationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .submit_application
        .execute(req.into_inner().into())
        .await
    {
        Ok(report) => ApiResponse::success(report),

        Err(SubmitApplicationError::Invalid(message)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }

        Err(SubmitApplicationError::NotConfigured) => {
            error!("Submission received but neither the database nor the CRM is configured");
            ApiResponse::configuration_error("No submission destination is configured")
        }

        Err(SubmitApplicationError::AllSinksFailed(report)) => ApiResponse::failure(
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_ERROR",
            "The application could not be stored",
            report,
        ),
    }
}

pub fn resource() -> impl HttpServiceFactory {
    api_resource(
        "/api/submit-revendedor",
        "POST",
        web::post().to(submit_application_handler),
    )
}
