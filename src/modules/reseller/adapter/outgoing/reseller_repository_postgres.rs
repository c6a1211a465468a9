use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::reseller::adapter::outgoing::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::modules::reseller::application::domain::entities::ResellerStatus;
use crate::modules::reseller::application::domain::monthly_volume::extract_monthly_volume;
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    NewReseller, PatchField, PatchResellerData, ResellerRepository, ResellerRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ResellerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResellerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResellerRepository for ResellerRepositoryPostgres {
    async fn insert(&self, data: NewReseller) -> Result<i64, ResellerRepositoryError> {
        let now = Utc::now().fixed_offset();
        let monthly_volume_num = data.monthly_volume.as_deref().and_then(extract_monthly_volume);

        let model = ActiveModel {
            full_name: Set(data.full_name),
            business_name: Set(data.business_name),
            tax_id: Set(data.tax_id),
            city_state: Set(data.city_state),
            phone: Set(data.phone),
            email: Set(data.email),
            social_handle: Set(data.social_handle),
            years_in_market: Set(data.years_in_market),
            understands_purpose: Set(data.understands_purpose.map(|v| v.as_str().to_string())),
            sells_footwear_apparel: Set(data
                .sells_footwear_apparel
                .map(|v| v.as_str().to_string())),
            sales_channel: Set(data.sales_channel.map(|v| v.as_str().to_string())),
            brand_attraction: Set(data.brand_attraction),
            follows_brand_standards: Set(data
                .follows_brand_standards
                .map(|v| v.as_str().to_string())),
            monthly_volume: Set(data.monthly_volume),
            monthly_volume_num: Set(monthly_volume_num),
            status: Set(Some(ResellerStatus::Pending.as_str().to_string())),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.id)
    }

    async fn patch(
        &self,
        id: i64,
        data: PatchResellerData,
    ) -> Result<(), ResellerRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.full_name {
            model.full_name = Set(name);
        }
        if let PatchField::Value(city) = data.city_state {
            model.city_state = Set(city);
        }
        if let PatchField::Value(phone) = data.phone {
            model.phone = Set(phone);
        }

        if let Some(v) = data.business_name.into_column() {
            model.business_name = Set(v);
        }
        if let Some(v) = data.tax_id.into_column() {
            model.tax_id = Set(v);
        }
        if let Some(v) = data.email.into_column() {
            model.email = Set(v);
        }
        if let Some(v) = data.social_handle.into_column() {
            model.social_handle = Set(v);
        }
        if let Some(v) = data.years_in_market.into_column() {
            model.years_in_market = Set(v);
        }
        if let Some(v) = data
            .understands_purpose
            .map(|v| v.as_str().to_string())
            .into_column()
        {
            model.understands_purpose = Set(v);
        }
        if let Some(v) = data
            .sells_footwear_apparel
            .map(|v| v.as_str().to_string())
            .into_column()
        {
            model.sells_footwear_apparel = Set(v);
        }
        if let Some(v) = data
            .sales_channel
            .map(|v| v.as_str().to_string())
            .into_column()
        {
            model.sales_channel = Set(v);
        }
        if let Some(v) = data.brand_attraction.into_column() {
            model.brand_attraction = Set(v);
        }
        if let Some(v) = data
            .follows_brand_standards
            .map(|v| v.as_str().to_string())
            .into_column()
        {
            model.follows_brand_standards = Set(v);
        }
        if let Some(v) = data.monthly_volume.into_column() {
            model.monthly_volume_num = Set(v.as_deref().and_then(extract_monthly_volume));
            model.monthly_volume = Set(v);
        }

        if let Some(status) = data.status {
            model.status = Set(Some(status.as_str().to_string()));
        }

        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResellerRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ResellerRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResellerRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ResellerRepositoryError {
    ResellerRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
