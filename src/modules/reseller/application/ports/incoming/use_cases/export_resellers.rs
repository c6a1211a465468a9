use async_trait::async_trait;

use crate::modules::reseller::application::domain::csv_export::{CsvExportError, ResellerExport};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    ResellerListFilter, ResellerQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportResellersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl From<ResellerQueryError> for ExportResellersError {
    fn from(err: ResellerQueryError) -> Self {
        match err {
            ResellerQueryError::DatabaseError(msg) => ExportResellersError::QueryFailed(msg),
        }
    }
}

impl From<CsvExportError> for ExportResellersError {
    fn from(err: CsvExportError) -> Self {
        ExportResellersError::RenderFailed(err.to_string())
    }
}

/// Same filter and order as listing, without paging.
#[async_trait]
pub trait ExportResellersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ResellerListFilter,
    ) -> Result<ResellerExport, ExportResellersError>;
}
