use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::modules::reseller::application::domain::entities::{SalesChannel, YesNo};

//
// ──────────────────────────────────────────────────────────
// Raw application
// ──────────────────────────────────────────────────────────
//

/// Public form answers as received; nothing is trusted yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationInput {
    pub full_name: Option<String>,
    pub business_name: Option<String>,
    pub tax_id: Option<String>,
    pub city_state: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_handle: Option<String>,
    pub years_in_market: Option<String>,
    pub understands_purpose: Option<YesNo>,
    pub sells_footwear_apparel: Option<YesNo>,
    pub sales_channel: Option<SalesChannel>,
    pub brand_attraction: Option<String>,
    pub follows_brand_standards: Option<YesNo>,
    pub monthly_volume: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Validated application
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required fields: {}", self.0.join(", "))
    }
}

/// Required fields present and every text field trimmed; blank optionals are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitApplicationCommand {
    pub full_name: String,
    pub business_name: Option<String>,
    pub tax_id: Option<String>,
    pub city_state: String,
    pub phone: String,
    pub email: Option<String>,
    pub social_handle: Option<String>,
    pub years_in_market: Option<String>,
    pub understands_purpose: Option<YesNo>,
    pub sells_footwear_apparel: Option<YesNo>,
    pub sales_channel: Option<SalesChannel>,
    pub brand_attraction: Option<String>,
    pub follows_brand_standards: Option<YesNo>,
    pub monthly_volume: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<ApplicationInput> for SubmitApplicationCommand {
    type Error = MissingFields;

    fn try_from(input: ApplicationInput) -> Result<Self, Self::Error> {
        let full_name = trimmed(input.full_name);
        let city_state = trimmed(input.city_state);
        let phone = trimmed(input.phone);

        let mut missing = Vec::new();
        if full_name.is_none() {
            missing.push("nomeCompleto");
        }
        if city_state.is_none() {
            missing.push("cidadeEstado");
        }
        if phone.is_none() {
            missing.push("telefoneWhatsapp");
        }

        match (full_name, city_state, phone) {
            (Some(full_name), Some(city_state), Some(phone)) => Ok(Self {
                full_name,
                business_name: trimmed(input.business_name),
                tax_id: trimmed(input.tax_id),
                city_state,
                phone,
                email: trimmed(input.email),
                social_handle: trimmed(input.social_handle),
                years_in_market: trimmed(input.years_in_market),
                understands_purpose: input.understands_purpose,
                sells_footwear_apparel: input.sells_footwear_apparel,
                sales_channel: input.sales_channel,
                brand_attraction: trimmed(input.brand_attraction),
                follows_brand_standards: input.follows_brand_standards,
                monthly_volume: trimmed(input.monthly_volume),
            }),
            _ => Err(MissingFields(missing)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

/// What happened to one destination of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SinkOutcome {
    Written,
    Failed { reason: String },
    NotConfigured,
}

impl SinkOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, SinkOutcome::Written)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub store: SinkOutcome,
    pub crm: SinkOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reseller_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl SubmissionReport {
    pub fn any_written(&self) -> bool {
        self.store.is_written() || self.crm.is_written()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input() -> ApplicationInput {
        ApplicationInput {
            full_name: Some("  Maria Silva ".to_string()),
            city_state: Some("São Paulo, SP".to_string()),
            phone: Some("11999998888".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_is_trimmed() {
        let mut raw = input();
        raw.business_name = Some("   ".to_string());
        raw.monthly_volume = Some(" 300 ".to_string());

        let command = SubmitApplicationCommand::try_from(raw).unwrap();

        assert_eq!(command.full_name, "Maria Silva");
        assert_eq!(command.business_name, None);
        assert_eq!(command.monthly_volume.as_deref(), Some("300"));
    }

    #[test]
    fn test_missing_fields_are_listed_in_form_names() {
        let raw = ApplicationInput {
            full_name: Some("Ana".to_string()),
            city_state: Some("  ".to_string()),
            ..Default::default()
        };

        let err = SubmitApplicationCommand::try_from(raw).unwrap_err();

        assert_eq!(err.0, vec!["cidadeEstado", "telefoneWhatsapp"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: cidadeEstado, telefoneWhatsapp"
        );
    }

    #[test]
    fn test_report_serializes_tagged_outcomes() {
        let report = SubmissionReport {
            store: SinkOutcome::Written,
            crm: SinkOutcome::Failed {
                reason: "timeout".to_string(),
            },
            reseller_id: Some(7),
            contact_id: None,
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "store": { "status": "written" },
                "crm": { "status": "failed", "reason": "timeout" },
                "resellerId": 7
            })
        );
        assert!(report.any_written());
    }

    #[test]
    fn test_not_configured_outcome() {
        assert_eq!(
            serde_json::to_value(SinkOutcome::NotConfigured).unwrap(),
            json!({ "status": "not_configured" })
        );
    }
}
