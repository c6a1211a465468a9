// src/modules/reseller/application/ports/outgoing/reseller_query.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::reseller::application::domain::entities::{
    normalize_status, ResellerRecord, ResellerStatus,
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ResellerStatus),
}

impl StatusFilter {
    /// `todos` (or nothing) means every status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" | "todos" => Some(StatusFilter::All),
            other => ResellerStatus::parse(other).map(StatusFilter::Only),
        }
    }

    pub fn matches(&self, status: ResellerStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResellerListFilter {
    pub status: StatusFilter,
    search: Option<String>,
}

impl ResellerListFilter {
    pub fn new(status: StatusFilter, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self { status, search }
    }

    /// Trimmed, non-empty search term.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// In-process equivalent of the store-side filter.
    pub fn matches(&self, record: &ResellerRecord) -> bool {
        if !self.status.matches(record.status) {
            return false;
        }

        let Some(term) = self.search() else {
            return true;
        };

        let needle = term.to_lowercase();
        [
            Some(record.full_name.as_str()),
            record.business_name.as_deref(),
            Some(record.city_state.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

//
// ──────────────────────────────────────────────────────────
// Paging
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Page is 1-based; zeros fall back to the first page / default size.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// False when the row offset of this page exceeds a signed 64-bit OFFSET.
    pub fn is_addressable(&self) -> bool {
        u64::from(self.page - 1)
            .checked_mul(u64::from(self.page_size))
            .is_some_and(|offset| offset <= i64::MAX as u64)
    }

    pub fn range(&self) -> QueryRange {
        QueryRange {
            offset: u64::from(self.page - 1) * u64::from(self.page_size),
            limit: Some(u64::from(self.page_size)),
        }
    }
}

/// Zero-based window over the ordered, filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRange {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl QueryRange {
    pub fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    pub rows: Vec<ResellerRecord>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResellerPage {
    pub rows: Vec<ResellerRecord>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl ResellerPage {
    pub fn new(result: QueryPage, request: PageRequest) -> Self {
        Self {
            total_pages: result.total.div_ceil(u64::from(request.page_size)),
            rows: result.rows,
            total_count: result.total,
            page: request.page,
            page_size: request.page_size,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Stats
// ──────────────────────────────────────────────────────────
//

/// Per-stored-status aggregate as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTally {
    pub status: Option<String>,
    pub count: i64,
    pub monthly_volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResellerStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub total_monthly_volume: i64,
}

impl ResellerStats {
    pub fn from_tallies(tallies: impl IntoIterator<Item = StatusTally>) -> Self {
        tallies
            .into_iter()
            .fold(ResellerStats::default(), |mut stats, tally| {
                stats.total += tally.count;
                stats.total_monthly_volume += tally.monthly_volume;

                match normalize_status(tally.status.as_deref()) {
                    ResellerStatus::Pending => stats.pending += tally.count,
                    ResellerStatus::Approved => stats.approved += tally.count,
                    ResellerStatus::Rejected => stats.rejected += tally.count,
                }

                stats
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResellerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResellerQuery: Send + Sync {
    /// Filtered rows in canonical order within `range`, plus the unpaged total.
    async fn list(
        &self,
        filter: &ResellerListFilter,
        range: QueryRange,
    ) -> Result<QueryPage, ResellerQueryError>;

    async fn stats(&self) -> Result<ResellerStats, ResellerQueryError>;
}
