use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::crm::application::ports::outgoing::{CrmContact, CrmContacts};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    NewReseller, ResellerRepository,
};
use crate::modules::submission::application::domain::contact_email::derive_contact_email;
use crate::modules::submission::application::domain::entities::{
    ApplicationInput, SinkOutcome, SubmissionReport, SubmitApplicationCommand,
};
use crate::modules::submission::application::ports::incoming::use_cases::{
    SubmitApplicationError, SubmitApplicationUseCase,
};

/// Writes an application to the record store and the CRM concurrently.
/// Either destination may be absent; a submission succeeds when at least one
/// write lands.
#[derive(Clone)]
pub struct SubmitApplicationService {
    store: Option<Arc<dyn ResellerRepository + Send + Sync>>,
    crm: Option<Arc<dyn CrmContacts + Send + Sync>>,
}

impl SubmitApplicationService {
    pub fn new(
        store: Option<Arc<dyn ResellerRepository + Send + Sync>>,
        crm: Option<Arc<dyn CrmContacts + Send + Sync>>,
    ) -> Self {
        Self { store, crm }
    }

    async fn write_store(&self, record: NewReseller) -> (SinkOutcome, Option<i64>) {
        let Some(store) = &self.store else {
            return (SinkOutcome::NotConfigured, None);
        };

        match store.insert(record).await {
            Ok(id) => (SinkOutcome::Written, Some(id)),
            Err(e) => {
                warn!(error = %e, "Record store write failed");
                (
                    SinkOutcome::Failed {
                        reason: e.to_string(),
                    },
                    None,
                )
            }
        }
    }

    async fn write_crm(&self, contact: CrmContact) -> (SinkOutcome, Option<String>) {
        let Some(crm) = &self.crm else {
            return (SinkOutcome::NotConfigured, None);
        };

        match crm.register_contact(contact).await {
            Ok(id) => (SinkOutcome::Written, Some(id)),
            Err(e) => {
                warn!(error = %e, "CRM write failed");
                (
                    SinkOutcome::Failed {
                        reason: e.to_string(),
                    },
                    None,
                )
            }
        }
    }
}

fn new_reseller(command: &SubmitApplicationCommand, email: &str) -> NewReseller {
    NewReseller {
        full_name: command.full_name.clone(),
        business_name: command.business_name.clone(),
        tax_id: command.tax_id.clone(),
        city_state: command.city_state.clone(),
        phone: command.phone.clone(),
        email: Some(email.to_string()),
        social_handle: command.social_handle.clone(),
        years_in_market: command.years_in_market.clone(),
        understands_purpose: command.understands_purpose,
        sells_footwear_apparel: command.sells_footwear_apparel,
        sales_channel: command.sales_channel,
        brand_attraction: command.brand_attraction.clone(),
        follows_brand_standards: command.follows_brand_standards,
        monthly_volume: command.monthly_volume.clone(),
    }
}

fn crm_contact(command: &SubmitApplicationCommand, email: &str) -> CrmContact {
    let mut details = Map::new();
    let mut put = |key: &str, value: Option<&str>| {
        if let Some(v) = value {
            details.insert(key.to_string(), Value::from(v));
        }
    };

    put("empresaLoja", command.business_name.as_deref());
    put("cnpj", command.tax_id.as_deref());
    put("cidadeEstado", Some(command.city_state.as_str()));
    put("instagramRedes", command.social_handle.as_deref());
    put("tempoMercado", command.years_in_market.as_deref());
    put(
        "entendeProposito",
        command.understands_purpose.map(|v| v.as_str()),
    );
    put(
        "vendeCalcadosVestuario",
        command.sells_footwear_apparel.map(|v| v.as_str()),
    );
    put("formaVenda", command.sales_channel.map(|v| v.as_str()));
    put("oQueChamouAtencao", command.brand_attraction.as_deref());
    put(
        "seguePadroesMarca",
        command.follows_brand_standards.map(|v| v.as_str()),
    );
    put("paresPorMes", command.monthly_volume.as_deref());

    CrmContact {
        email: email.to_string(),
        full_name: command.full_name.clone(),
        phone: command.phone.clone(),
        details,
    }
}

#[async_trait]
impl SubmitApplicationUseCase for SubmitApplicationService {
    async fn execute(
        &self,
        input: ApplicationInput,
    ) -> Result<SubmissionReport, SubmitApplicationError> {
        let command = SubmitApplicationCommand::try_from(input)?;

        if self.store.is_none() && self.crm.is_none() {
            return Err(SubmitApplicationError::NotConfigured);
        }

        let email = derive_contact_email(
            command.email.as_deref(),
            &command.phone,
            Utc::now().timestamp_millis(),
        );

        let ((store, reseller_id), (crm, contact_id)) = futures::join!(
            self.write_store(new_reseller(&command, &email)),
            self.write_crm(crm_contact(&command, &email)),
        );

        let report = SubmissionReport {
            store,
            crm,
            reseller_id,
            contact_id,
        };

        if !report.any_written() {
            return Err(SubmitApplicationError::AllSinksFailed(report));
        }

        info!(
            reseller_id = ?report.reseller_id,
            contact_id = ?report.contact_id,
            "Reseller application received"
        );

        Ok(report)
    }
}
