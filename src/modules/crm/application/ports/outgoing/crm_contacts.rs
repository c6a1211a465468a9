// src/modules/crm/application/ports/outgoing/crm_contacts.rs

use async_trait::async_trait;
use serde_json::{Map, Value};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CrmContact {
    pub email: String,
    pub full_name: String,
    pub phone: String,

    /// Remaining application answers, keyed by their form names.
    pub details: Map<String, Value>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrmError {
    #[error("CRM rejected the contact (HTTP {status})")]
    Rejected { status: u16, body: String },

    #[error("Contact {contact_id} created but list subscription failed (HTTP {status})")]
    ListSubscriptionFailed { contact_id: String, status: u16 },

    #[error("Unexpected CRM response: {0}")]
    InvalidResponse(String),

    #[error("CRM unreachable: {0}")]
    Transport(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CrmContacts: Send + Sync {
    /// Creates the contact and subscribes it to the configured list.
    /// Returns the CRM's contact id.
    async fn register_contact(&self, contact: CrmContact) -> Result<String, CrmError>;
}
