use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::reseller::application::domain::entities::{ResellerRecord, ResellerStatus};
use crate::modules::reseller::application::domain::monthly_volume::extract_monthly_volume;
use crate::modules::reseller::application::domain::ordering::canonical_order;
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    QueryPage, QueryRange, ResellerListFilter, ResellerQuery, ResellerQueryError, ResellerStats,
    StatusTally,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    NewReseller, PatchField, PatchResellerData, ResellerRepository, ResellerRepositoryError,
};

#[derive(Default)]
struct State {
    rows: Vec<ResellerRecord>,
    next_id: i64,
    patches: usize,
}

/// Record store kept in a Vec, applying the same filter and order rules as
/// the Postgres adapters. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryResellerStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryResellerStore {
    pub fn with_rows(rows: Vec<ResellerRecord>) -> Self {
        let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            state: Arc::new(Mutex::new(State {
                rows,
                next_id,
                patches: 0,
            })),
        }
    }

    pub fn get(&self, id: i64) -> Option<ResellerRecord> {
        let state = self.state.lock().unwrap();
        state.rows.iter().find(|r| r.id == id).cloned()
    }

    pub fn rows(&self) -> Vec<ResellerRecord> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn patch_count(&self) -> usize {
        self.state.lock().unwrap().patches
    }
}

fn apply<T>(field: PatchField<T>, target: &mut Option<T>) {
    if let Some(v) = field.into_column() {
        *target = v;
    }
}

#[async_trait]
impl ResellerQuery for InMemoryResellerStore {
    async fn list(
        &self,
        filter: &ResellerListFilter,
        range: QueryRange,
    ) -> Result<QueryPage, ResellerQueryError> {
        let state = self.state.lock().unwrap();

        let mut matching: Vec<ResellerRecord> = state
            .rows
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        matching.sort_by(canonical_order);

        let total = matching.len() as u64;
        let rows = matching
            .into_iter()
            .skip(range.offset as usize)
            .take(range.limit.map_or(usize::MAX, |l| l as usize))
            .collect();

        Ok(QueryPage { rows, total })
    }

    async fn stats(&self) -> Result<ResellerStats, ResellerQueryError> {
        let state = self.state.lock().unwrap();

        Ok(ResellerStats::from_tallies(state.rows.iter().map(|r| {
            StatusTally {
                status: Some(r.status.as_str().to_string()),
                count: 1,
                monthly_volume: r.monthly_volume_num.unwrap_or(0),
            }
        })))
    }
}

#[async_trait]
impl ResellerRepository for InMemoryResellerStore {
    async fn insert(&self, data: NewReseller) -> Result<i64, ResellerRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let now = Utc::now();

        state.rows.push(ResellerRecord {
            id,
            monthly_volume_num: data.monthly_volume.as_deref().and_then(extract_monthly_volume),
            full_name: data.full_name,
            business_name: data.business_name,
            tax_id: data.tax_id,
            city_state: data.city_state,
            phone: data.phone,
            email: data.email,
            social_handle: data.social_handle,
            years_in_market: data.years_in_market,
            understands_purpose: data.understands_purpose,
            sells_footwear_apparel: data.sells_footwear_apparel,
            sales_channel: data.sales_channel,
            brand_attraction: data.brand_attraction,
            follows_brand_standards: data.follows_brand_standards,
            monthly_volume: data.monthly_volume,
            status: ResellerStatus::Pending,
            created_at: now,
            updated_at: Some(now),
        });

        Ok(id)
    }

    async fn patch(&self, id: i64, data: PatchResellerData) -> Result<(), ResellerRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.patches += 1;

        let row = state
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ResellerRepositoryError::NotFound)?;

        if let PatchField::Value(v) = data.full_name {
            row.full_name = v;
        }
        if let PatchField::Value(v) = data.city_state {
            row.city_state = v;
        }
        if let PatchField::Value(v) = data.phone {
            row.phone = v;
        }
        apply(data.business_name, &mut row.business_name);
        apply(data.tax_id, &mut row.tax_id);
        apply(data.email, &mut row.email);
        apply(data.social_handle, &mut row.social_handle);
        apply(data.years_in_market, &mut row.years_in_market);
        apply(data.understands_purpose, &mut row.understands_purpose);
        apply(data.sells_footwear_apparel, &mut row.sells_footwear_apparel);
        apply(data.sales_channel, &mut row.sales_channel);
        apply(data.brand_attraction, &mut row.brand_attraction);
        apply(data.follows_brand_standards, &mut row.follows_brand_standards);
        if !data.monthly_volume.is_unset() {
            apply(data.monthly_volume, &mut row.monthly_volume);
            row.monthly_volume_num = row.monthly_volume.as_deref().and_then(extract_monthly_volume);
        }
        if let Some(status) = data.status {
            row.status = status;
        }
        row.updated_at = Some(Utc::now());

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ResellerRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|r| r.id != id);

        if state.rows.len() == before {
            return Err(ResellerRepositoryError::NotFound);
        }

        Ok(())
    }
}
