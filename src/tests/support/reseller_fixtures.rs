use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::modules::reseller::adapter::outgoing::sea_orm_entity;
use crate::modules::reseller::application::domain::entities::{
    ResellerRecord, ResellerStatus, SalesChannel, YesNo,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::NewReseller;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap()
}

/// Minimal pending record: required fields plus the ordering inputs.
pub fn record(
    id: i64,
    name: &str,
    volume: Option<i64>,
    created_at: DateTime<Utc>,
) -> ResellerRecord {
    ResellerRecord {
        id,
        full_name: name.to_string(),
        business_name: None,
        tax_id: None,
        city_state: "São Paulo, SP".to_string(),
        phone: "11999998888".to_string(),
        email: None,
        social_handle: None,
        years_in_market: None,
        understands_purpose: None,
        sells_footwear_apparel: None,
        sales_channel: None,
        brand_attraction: None,
        follows_brand_standards: None,
        monthly_volume: volume.map(|v| v.to_string()),
        monthly_volume_num: volume,
        status: ResellerStatus::Pending,
        created_at,
        updated_at: None,
    }
}

/// Every field filled, including characters that need CSV quoting.
pub fn full_record(id: i64) -> ResellerRecord {
    ResellerRecord {
        id,
        full_name: "Maria \"Mari\" Silva".to_string(),
        business_name: Some("Calçados; Bom Passo".to_string()),
        tax_id: Some("12.345.678/0001-90".to_string()),
        city_state: "Recife, PE".to_string(),
        phone: "81988887777".to_string(),
        email: Some("maria@bompasso.com.br".to_string()),
        social_handle: Some("@bompasso".to_string()),
        years_in_market: Some("5 anos".to_string()),
        understands_purpose: Some(YesNo::Yes),
        sells_footwear_apparel: Some(YesNo::Yes),
        sales_channel: Some(SalesChannel::Mixed),
        brand_attraction: Some("Preço justo".to_string()),
        follows_brand_standards: Some(YesNo::No),
        monthly_volume: Some("300 pares".to_string()),
        monthly_volume_num: Some(300),
        status: ResellerStatus::Approved,
        created_at: fixed_now(),
        updated_at: Some(fixed_now() + Duration::days(2)),
    }
}

pub fn new_reseller(name: &str) -> NewReseller {
    NewReseller {
        full_name: name.to_string(),
        city_state: "São Paulo, SP".to_string(),
        phone: "11999998888".to_string(),
        ..Default::default()
    }
}

/// `count` records with volumes and timestamps chosen to exercise every
/// ordering key (shared volumes, missing volumes, shared timestamps).
pub fn snapshot(count: i64) -> Vec<ResellerRecord> {
    let base = fixed_now();

    (1..=count)
        .map(|id| {
            let volume = match id % 4 {
                0 => None,
                1 => Some(100),
                2 => Some(id * 10),
                _ => Some(100),
            };
            let created_at = base - Duration::hours(id % 3);
            let mut row = record(id, &format!("Revendedor {id}"), volume, created_at);
            row.status = match id % 3 {
                0 => ResellerStatus::Approved,
                1 => ResellerStatus::Pending,
                _ => ResellerStatus::Rejected,
            };
            row.city_state = if id % 2 == 0 {
                "Campinas, SP".to_string()
            } else {
                "Belo Horizonte, MG".to_string()
            };
            row
        })
        .collect()
}

pub fn model(id: i64, name: &str, volume: Option<i64>, status: Option<&str>) -> sea_orm_entity::Model {
    let now = fixed_now().fixed_offset();

    sea_orm_entity::Model {
        id,
        full_name: name.to_string(),
        business_name: Some("Loja Teste".to_string()),
        tax_id: None,
        city_state: "São Paulo, SP".to_string(),
        phone: "11999998888".to_string(),
        email: Some("contato@loja.com".to_string()),
        social_handle: None,
        years_in_market: Some("2 anos".to_string()),
        understands_purpose: Some("sim".to_string()),
        sells_footwear_apparel: Some("nao".to_string()),
        sales_channel: Some("online".to_string()),
        brand_attraction: None,
        follows_brand_standards: None,
        monthly_volume: volume.map(|v| format!("{v} pares")),
        monthly_volume_num: volume,
        status: status.map(str::to_string),
        created_at: now,
        updated_at: None,
    }
}
