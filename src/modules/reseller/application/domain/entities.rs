use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose syntactic check used for contact emails (`local@domain.tld`).
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

//
// ──────────────────────────────────────────────────────────
// Workflow status
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum ResellerStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "aprovado")]
    Approved,
    #[serde(rename = "rejeitado")]
    Rejected,
}

impl ResellerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResellerStatus::Pending => "pendente",
            ResellerStatus::Approved => "aprovado",
            ResellerStatus::Rejected => "rejeitado",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "pendente" => Some(ResellerStatus::Pending),
            "aprovado" => Some(ResellerStatus::Approved),
            "rejeitado" => Some(ResellerStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ResellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-boundary rule for stored statuses: NULL or anything unrecognised is pending.
pub fn normalize_status(raw: Option<&str>) -> ResellerStatus {
    raw.and_then(ResellerStatus::parse).unwrap_or_default()
}

//
// ──────────────────────────────────────────────────────────
// Qualification answers
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum YesNo {
    #[serde(rename = "sim")]
    Yes,
    #[serde(rename = "nao")]
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "sim",
            YesNo::No => "nao",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "sim" => Some(YesNo::Yes),
            "nao" => Some(YesNo::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SalesChannel {
    #[serde(rename = "fisica")]
    PhysicalStore,
    #[serde(rename = "online")]
    OnlineStore,
    #[serde(rename = "marketplace")]
    Marketplace,
    #[serde(rename = "porta")]
    DoorToDoor,
    #[serde(rename = "mistos")]
    Mixed,
}

impl SalesChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesChannel::PhysicalStore => "fisica",
            SalesChannel::OnlineStore => "online",
            SalesChannel::Marketplace => "marketplace",
            SalesChannel::DoorToDoor => "porta",
            SalesChannel::Mixed => "mistos",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "fisica" => Some(SalesChannel::PhysicalStore),
            "online" => Some(SalesChannel::OnlineStore),
            "marketplace" => Some(SalesChannel::Marketplace),
            "porta" => Some(SalesChannel::DoorToDoor),
            "mistos" => Some(SalesChannel::Mixed),
            _ => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────────────────
//

/// One row of `revendedores` as the admin UI sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResellerRecord {
    pub id: i64,

    #[serde(rename = "nome_completo")]
    pub full_name: String,

    #[serde(rename = "empresa_loja")]
    pub business_name: Option<String>,

    #[serde(rename = "cnpj")]
    pub tax_id: Option<String>,

    #[serde(rename = "cidade_estado")]
    pub city_state: String,

    #[serde(rename = "telefone_whatsapp")]
    pub phone: String,

    pub email: Option<String>,

    #[serde(rename = "instagram_redes")]
    pub social_handle: Option<String>,

    #[serde(rename = "tempo_mercado")]
    pub years_in_market: Option<String>,

    #[serde(rename = "entende_proposito")]
    pub understands_purpose: Option<YesNo>,

    #[serde(rename = "vende_calcados_vestuario")]
    pub sells_footwear_apparel: Option<YesNo>,

    #[serde(rename = "forma_venda")]
    pub sales_channel: Option<SalesChannel>,

    #[serde(rename = "o_que_chamou_atencao")]
    pub brand_attraction: Option<String>,

    #[serde(rename = "segue_padroes_marca")]
    pub follows_brand_standards: Option<YesNo>,

    #[serde(rename = "pares_por_mes")]
    pub monthly_volume: Option<String>,

    /// Numeric part of `pares_por_mes`; drives the listing order.
    #[serde(rename = "pares_por_mes_num")]
    pub monthly_volume_num: Option<i64>,

    pub status: ResellerStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}
