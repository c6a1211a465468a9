// src/modules/reseller/adapter/outgoing/reseller_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, NullOrdering, Order};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::reseller::adapter::outgoing::sea_orm_entity::{Column, Entity};
use crate::modules::reseller::application::domain::entities::ResellerStatus;
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    QueryPage, QueryRange, ResellerListFilter, ResellerQuery, ResellerQueryError, ResellerStats,
    StatusFilter, StatusTally,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ResellerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResellerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct StatusTallyRow {
    status: Option<String>,
    count: i64,
    monthly_volume: i64,
}

#[async_trait]
impl ResellerQuery for ResellerQueryPostgres {
    async fn list(
        &self,
        filter: &ResellerListFilter,
        range: QueryRange,
    ) -> Result<QueryPage, ResellerQueryError> {
        let query = ordered(filtered(filter));

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let mut page = query.offset(range.offset);
        if let Some(limit) = range.limit {
            page = page.limit(limit);
        }

        let rows = page
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .map(|model| model.to_record())
            .collect();

        Ok(QueryPage { rows, total })
    }

    async fn stats(&self) -> Result<ResellerStats, ResellerQueryError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Status)
            .column_as(Expr::col(Column::Id).count(), "count")
            .column_as(
                Expr::cust("COALESCE(SUM(pares_por_mes_num), 0)::BIGINT"),
                "monthly_volume",
            )
            .group_by(Column::Status)
            .into_model::<StatusTallyRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ResellerStats::from_tallies(rows.into_iter().map(|row| {
            StatusTally {
                status: row.status,
                count: row.count,
                monthly_volume: row.monthly_volume,
            }
        })))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn filtered(filter: &ResellerListFilter) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(term) = filter.search() {
        let pattern = like_pattern(term);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::FullName).ilike(pattern.as_str()))
                .add(Expr::col(Column::BusinessName).ilike(pattern.as_str()))
                .add(Expr::col(Column::CityState).ilike(pattern.as_str())),
        );
    }

    match filter.status {
        StatusFilter::All => {}
        // Rows stored before the status column had a default read as pending.
        StatusFilter::Only(ResellerStatus::Pending) => {
            query = query.filter(
                Condition::any()
                    .add(Column::Status.eq(ResellerStatus::Pending.as_str()))
                    .add(Column::Status.is_null()),
            );
        }
        StatusFilter::Only(status) => {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
    }

    query
}

/// Same key as `canonical_order`.
fn ordered(query: Select<Entity>) -> Select<Entity> {
    query
        .order_by_with_nulls(Column::MonthlyVolumeNum, Order::Desc, NullOrdering::Last)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

/// `%term%` with LIKE metacharacters escaped (backslash is the default escape).
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_db_err(e: DbErr) -> ResellerQueryError {
    ResellerQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reseller::adapter::outgoing::sea_orm_entity;
    use crate::tests::support::reseller_fixtures::model;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> Vec<BTreeMap<String, Value>> {
        vec![BTreeMap::from([(
            "num_items".to_string(),
            Value::BigInt(Some(n)),
        )])]
    }

    fn sql(filter: &ResellerListFilter) -> String {
        ordered(filtered(filter))
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    // ========================================================================
    // SQL shape
    // ========================================================================

    #[test]
    fn test_canonical_order_clause() {
        let sql = sql(&ResellerListFilter::default());

        assert!(sql.contains(
            r#"ORDER BY "revendedores"."pares_por_mes_num" DESC NULLS LAST, "revendedores"."created_at" DESC, "revendedores"."id" DESC"#
        ));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_search_ors_three_columns_with_ilike() {
        let filter = ResellerListFilter::new(StatusFilter::All, Some("  maria ".to_string()));
        let sql = sql(&filter);

        assert!(sql.contains(r#""nome_completo" ILIKE '%maria%'"#));
        assert!(sql.contains(r#""empresa_loja" ILIKE '%maria%'"#));
        assert!(sql.contains(r#""cidade_estado" ILIKE '%maria%'"#));
        assert!(sql.contains(" OR "));
    }

    #[test]
    fn test_pending_filter_includes_null_status() {
        let filter = ResellerListFilter::new(StatusFilter::Only(ResellerStatus::Pending), None);
        let sql = sql(&filter);

        assert!(sql.contains(r#""status" = 'pendente'"#));
        assert!(sql.contains(r#""status" IS NULL"#));
    }

    #[test]
    fn test_approved_filter_is_exact() {
        let filter = ResellerListFilter::new(StatusFilter::Only(ResellerStatus::Approved), None);
        let sql = sql(&filter);

        assert!(sql.contains(r#""status" = 'aprovado'"#));
        assert!(!sql.contains("IS NULL"));
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%_off\\"), r"%50\%\_off\\%");
        assert_eq!(like_pattern("Ana"), "%Ana%");
    }

    // ========================================================================
    // list
    // ========================================================================

    #[tokio::test]
    async fn test_list_returns_rows_and_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![count_row(12)])
            .append_query_results(vec![vec![
                model(7, "Ana", Some(500), Some("aprovado")),
                model(3, "Bia", None, None),
            ]])
            .into_connection();

        let query = ResellerQueryPostgres::new(Arc::new(db));
        let page = query
            .list(
                &ResellerListFilter::default(),
                QueryRange {
                    offset: 10,
                    limit: Some(10),
                },
            )
            .await
            .unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].id, 7);
        assert_eq!(page.rows[0].status, ResellerStatus::Approved);
        // NULL status reads back as pending
        assert_eq!(page.rows[1].status, ResellerStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_unbounded_range_issues_no_limit() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![count_row(1)])
                .append_query_results(vec![vec![model(1, "Ana", Some(1), None)]])
                .into_connection(),
        );

        let query = ResellerQueryPostgres::new(Arc::clone(&db));
        let page = query
            .list(&ResellerListFilter::default(), QueryRange::unbounded())
            .await
            .unwrap();
        assert_eq!(page.rows.len(), 1);

        drop(query);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let select = format!("{:?}", log[1]);
        assert!(!select.contains("LIMIT"));
    }

    #[tokio::test]
    async fn test_list_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".into())])
            .into_connection();

        let query = ResellerQueryPostgres::new(Arc::new(db));
        let result = query
            .list(&ResellerListFilter::default(), QueryRange::unbounded())
            .await;

        assert!(matches!(
            result,
            Err(ResellerQueryError::DatabaseError(msg)) if msg.contains("connection reset")
        ));
    }

    // ========================================================================
    // stats
    // ========================================================================

    #[tokio::test]
    async fn test_stats_folds_grouped_rows() {
        let row = |status: Option<&str>, count: i64, volume: i64| {
            BTreeMap::from([
                (
                    "status".to_string(),
                    Value::String(status.map(|s| Box::new(s.to_string()))),
                ),
                ("count".to_string(), Value::BigInt(Some(count))),
                ("monthly_volume".to_string(), Value::BigInt(Some(volume))),
            ])
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                row(None, 1, 50),
                row(Some("pendente"), 2, 150),
                row(Some("aprovado"), 3, 900),
            ]])
            .into_connection();

        let query = ResellerQueryPostgres::new(Arc::new(db));
        let stats = query.stats().await.unwrap();

        assert_eq!(stats.total, 6);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.approved, 3);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.total_monthly_volume, 1100);
    }

    #[tokio::test]
    async fn test_stats_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<sea_orm_entity::Model>::new()])
            .into_connection();

        let query = ResellerQueryPostgres::new(Arc::new(db));
        let stats = query.stats().await.unwrap();

        assert_eq!(stats, ResellerStats::default());
    }
}
