use async_trait::async_trait;

use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    ResellerQueryError, ResellerStats,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResellerStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ResellerQueryError> for GetResellerStatsError {
    fn from(err: ResellerQueryError) -> Self {
        match err {
            ResellerQueryError::DatabaseError(msg) => GetResellerStatsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetResellerStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResellerStats, GetResellerStatsError>;
}
