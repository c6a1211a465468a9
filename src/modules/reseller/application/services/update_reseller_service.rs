use async_trait::async_trait;

use crate::modules::reseller::application::domain::entities::is_valid_email;
use crate::modules::reseller::application::ports::incoming::use_cases::{
    UpdateResellerError, UpdateResellerUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    PatchField, PatchResellerData, ResellerRepository,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateResellerService<R>
where
    R: ResellerRepository,
{
    repository: R,
}

impl<R> UpdateResellerService<R>
where
    R: ResellerRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateResellerUseCase for UpdateResellerService<R>
where
    R: ResellerRepository + Send + Sync,
{
    async fn execute(&self, id: i64, data: PatchResellerData) -> Result<(), UpdateResellerError> {
        let data = normalize_patch(data)?;

        self.repository
            .patch(id, data)
            .await
            .map_err(UpdateResellerError::from)
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

fn required(field: &str, value: PatchField<String>) -> Result<PatchField<String>, UpdateResellerError> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Value(v) if !v.trim().is_empty() => Ok(PatchField::Value(v.trim().to_string())),
        _ => Err(UpdateResellerError::Validation(format!(
            "{field} cannot be empty"
        ))),
    }
}

/// Blank text clears the column.
fn optional(value: PatchField<String>) -> PatchField<String> {
    match value {
        PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
        PatchField::Value(v) => PatchField::Value(v.trim().to_string()),
        other => other,
    }
}

fn normalize_patch(data: PatchResellerData) -> Result<PatchResellerData, UpdateResellerError> {
    let email = optional(data.email);
    if let Some(address) = email.as_value() {
        if !is_valid_email(address) {
            return Err(UpdateResellerError::Validation(
                "email is not a valid address".to_string(),
            ));
        }
    }

    Ok(PatchResellerData {
        full_name: required("nome_completo", data.full_name)?,
        city_state: required("cidade_estado", data.city_state)?,
        phone: required("telefone_whatsapp", data.phone)?,
        email,
        business_name: optional(data.business_name),
        tax_id: optional(data.tax_id),
        social_handle: optional(data.social_handle),
        years_in_market: optional(data.years_in_market),
        brand_attraction: optional(data.brand_attraction),
        monthly_volume: optional(data.monthly_volume),
        ..data
    })
}
