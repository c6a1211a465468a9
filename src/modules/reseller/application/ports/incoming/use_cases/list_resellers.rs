use async_trait::async_trait;

use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    PageRequest, ResellerListFilter, ResellerPage, ResellerQueryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListResellersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ResellerQueryError> for ListResellersError {
    fn from(err: ResellerQueryError) -> Self {
        match err {
            ResellerQueryError::DatabaseError(msg) => ListResellersError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListResellersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ResellerListFilter,
        page: PageRequest,
    ) -> Result<ResellerPage, ListResellersError>;
}
