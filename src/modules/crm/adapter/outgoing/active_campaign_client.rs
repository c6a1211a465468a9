use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;

use crate::modules::crm::application::ports::outgoing::{CrmContact, CrmContacts, CrmError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCampaignConfig {
    pub api_url: String,
    pub api_key: String,
    pub list_id: i64,
    pub custom_field_id: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Transport seam
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrmTransportError {
    #[error("request failed: {0}")]
    Send(String),
    #[error("could not read response body: {0}")]
    ReadBody(String),
}

/// POSTs a JSON body to `path` under the account URL; returns status and raw body.
#[async_trait]
pub trait CrmTransport: Send + Sync {
    async fn post_json(&self, path: &str, body: String) -> Result<(u16, String), CrmTransportError>;
}

pub struct ReqwestCrmTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReqwestCrmTransport {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl CrmTransport for ReqwestCrmTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<(u16, String), CrmTransportError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Api-Token", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| CrmTransportError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CrmTransportError::ReadBody(e.to_string()))?;

        Ok((status, text))
    }
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreatedContact {
    contact: Option<ContactRef>,
}

#[derive(Debug, Deserialize)]
struct ContactRef {
    id: Option<Value>,
}

pub struct ActiveCampaignClient {
    transport: Box<dyn CrmTransport>,
    list_id: i64,
    custom_field_id: Option<String>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for ActiveCampaignClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveCampaignClient")
            .field("list_id", &self.list_id)
            .finish()
    }
}

impl ActiveCampaignClient {
    pub fn new(client: reqwest::Client, config: ActiveCampaignConfig) -> Self {
        let transport = ReqwestCrmTransport::new(client, &config.api_url, &config.api_key);
        Self::with_transport(Box::new(transport), config.list_id, config.custom_field_id)
    }

    pub fn with_transport(
        transport: Box<dyn CrmTransport>,
        list_id: i64,
        custom_field_id: Option<String>,
    ) -> Self {
        Self {
            transport,
            list_id,
            custom_field_id,
        }
    }

    fn contact_body(&self, contact: &CrmContact) -> Value {
        let full_name = contact.full_name.trim();
        let mut words = full_name.split_whitespace();
        let first_name = words.next().unwrap_or(full_name);
        let last_name = words.collect::<Vec<_>>().join(" ");

        let field_values = match &self.custom_field_id {
            Some(field) => vec![json!({
                "field": field,
                "value": Value::Object(contact.details.clone()).to_string(),
            })],
            None => vec![],
        };

        json!({
            "contact": {
                "email": contact.email,
                "firstName": first_name,
                "lastName": last_name,
                "phone": contact.phone.trim(),
                "fieldValues": field_values,
            }
        })
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Contact ids come back as numbers or numeric strings depending on the endpoint version.
fn contact_id(body: &str) -> Option<String> {
    let created: CreatedContact = serde_json::from_str(body).ok()?;

    match created.contact?.id? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[async_trait]
impl CrmContacts for ActiveCampaignClient {
    async fn register_contact(&self, contact: CrmContact) -> Result<String, CrmError> {
        let (status, body) = self
            .transport
            .post_json("/api/3/contacts", self.contact_body(&contact).to_string())
            .await
            .map_err(|e| CrmError::Transport(e.to_string()))?;

        if !is_success(status) {
            tracing::error!(status, body = %body, "CRM create contact error");
            return Err(CrmError::Rejected { status, body });
        }

        let id = contact_id(&body).ok_or_else(|| {
            CrmError::InvalidResponse("contact id missing from create response".to_string())
        })?;

        // The list API expects the numeric id when there is one.
        let contact_ref = id
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(id.clone()));

        let subscription = json!({
            "contactList": {
                "list": self.list_id,
                "contact": contact_ref,
                "status": 1,
            }
        });

        let (status, body) = self
            .transport
            .post_json("/api/3/contactLists", subscription.to_string())
            .await
            .map_err(|e| CrmError::Transport(e.to_string()))?;

        if !is_success(status) {
            tracing::error!(status, body = %body, contact_id = %id, "CRM add to list error");
            return Err(CrmError::ListSubscriptionFailed {
                contact_id: id,
                status,
            });
        }

        Ok(id)
    }
}
