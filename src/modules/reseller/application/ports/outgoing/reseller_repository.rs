// src/modules/reseller/application/ports/outgoing/reseller_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::reseller::application::domain::entities::{
    ResellerStatus, SalesChannel, YesNo,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    /// Column update for a nullable column: `None` keeps, `Some(None)` clears.
    pub fn into_column(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// A validated application ready to be stored. Status always starts as pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReseller {
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

/// Patch semantics:
/// - full_name/city_state/phone: Unset => keep, Value => replace (never Null)
/// - everything else: Unset => keep, Null => clear, Value => set
/// - status: None => keep
///
/// Writing `monthly_volume` also rewrites its numeric column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchResellerData {
    pub full_name: PatchField<String>,
    pub business_name: PatchField<String>,
    pub tax_id: PatchField<String>,
    pub city_state: PatchField<String>,
    pub phone: PatchField<String>,
    pub email: PatchField<String>,
    pub social_handle: PatchField<String>,
    pub years_in_market: PatchField<String>,
    pub understands_purpose: PatchField<YesNo>,
    pub sells_footwear_apparel: PatchField<YesNo>,
    pub sales_channel: PatchField<SalesChannel>,
    pub brand_attraction: PatchField<String>,
    pub follows_brand_standards: PatchField<YesNo>,
    pub monthly_volume: PatchField<String>,
    pub status: Option<ResellerStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResellerRepositoryError {
    #[error("Reseller not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResellerRepository: Send + Sync {
    /// Stores a new pending record and returns its id.
    async fn insert(&self, data: NewReseller) -> Result<i64, ResellerRepositoryError>;

    /// Applies the patch and refreshes `updated_at`; `created_at` is never touched.
    async fn patch(&self, id: i64, data: PatchResellerData)
        -> Result<(), ResellerRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), ResellerRepositoryError>;
}
