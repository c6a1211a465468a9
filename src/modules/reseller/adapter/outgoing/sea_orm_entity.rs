use crate::modules::reseller::application::domain::entities::{
    normalize_status, ResellerRecord, SalesChannel, YesNo,
};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "revendedores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_name = "nome_completo")]
    pub full_name: String,

    #[sea_orm(column_name = "empresa_loja")]
    pub business_name: Option<String>,

    #[sea_orm(column_name = "cnpj")]
    pub tax_id: Option<String>,

    #[sea_orm(column_name = "cidade_estado")]
    pub city_state: String,

    #[sea_orm(column_name = "telefone_whatsapp")]
    pub phone: String,

    pub email: Option<String>,

    #[sea_orm(column_name = "instagram_redes")]
    pub social_handle: Option<String>,

    #[sea_orm(column_name = "tempo_mercado")]
    pub years_in_market: Option<String>,

    #[sea_orm(column_name = "entende_proposito")]
    pub understands_purpose: Option<String>,

    #[sea_orm(column_name = "vende_calcados_vestuario")]
    pub sells_footwear_apparel: Option<String>,

    #[sea_orm(column_name = "forma_venda")]
    pub sales_channel: Option<String>,

    #[sea_orm(column_name = "o_que_chamou_atencao")]
    pub brand_attraction: Option<String>,

    #[sea_orm(column_name = "segue_padroes_marca")]
    pub follows_brand_standards: Option<String>,

    #[sea_orm(column_name = "pares_por_mes")]
    pub monthly_volume: Option<String>,

    #[sea_orm(column_name = "pares_por_mes_num")]
    pub monthly_volume_num: Option<i64>,

    pub status: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    /// Rows written by older form versions may carry values outside the
    /// current enumerations; those read back as absent and are logged.
    pub fn to_record(&self) -> ResellerRecord {
        ResellerRecord {
            id: self.id,
            full_name: self.full_name.clone(),
            business_name: self.business_name.clone(),
            tax_id: self.tax_id.clone(),
            city_state: self.city_state.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            social_handle: self.social_handle.clone(),
            years_in_market: self.years_in_market.clone(),
            understands_purpose: answer(
                self.id,
                "entende_proposito",
                self.understands_purpose.as_deref(),
                YesNo::parse,
            ),
            sells_footwear_apparel: answer(
                self.id,
                "vende_calcados_vestuario",
                self.sells_footwear_apparel.as_deref(),
                YesNo::parse,
            ),
            sales_channel: answer(
                self.id,
                "forma_venda",
                self.sales_channel.as_deref(),
                SalesChannel::parse,
            ),
            brand_attraction: self.brand_attraction.clone(),
            follows_brand_standards: answer(
                self.id,
                "segue_padroes_marca",
                self.follows_brand_standards.as_deref(),
                YesNo::parse,
            ),
            monthly_volume: self.monthly_volume.clone(),
            monthly_volume_num: self.monthly_volume_num,
            status: normalize_status(self.status.as_deref()),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.map(Into::into),
        }
    }
}

fn answer<T>(
    id: i64,
    column: &'static str,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
    let parsed = parse(raw);

    if parsed.is_none() {
        tracing::warn!(reseller_id = id, column, value = raw, "Unrecognised stored answer dropped");
    }

    parsed
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
