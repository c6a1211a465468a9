use async_trait::async_trait;
use chrono::Utc;

use crate::modules::reseller::application::domain::csv_export::{render_csv, ResellerExport};
use crate::modules::reseller::application::ports::incoming::use_cases::{
    ExportResellersError, ExportResellersUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    QueryRange, ResellerListFilter, ResellerQuery,
};

pub struct ExportResellersService<Q>
where
    Q: ResellerQuery,
{
    query: Q,
}

impl<Q> ExportResellersService<Q>
where
    Q: ResellerQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ExportResellersUseCase for ExportResellersService<Q>
where
    Q: ResellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ResellerListFilter,
    ) -> Result<ResellerExport, ExportResellersError> {
        let result = self.query.list(&filter, QueryRange::unbounded()).await?;

        Ok(render_csv(&result.rows, Utc::now())?)
    }
}
