use async_trait::async_trait;

use crate::modules::reseller::application::ports::incoming::use_cases::{
    GetResellerStatsError, GetResellerStatsUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    ResellerQuery, ResellerStats,
};

pub struct GetResellerStatsService<Q>
where
    Q: ResellerQuery,
{
    query: Q,
}

impl<Q> GetResellerStatsService<Q>
where
    Q: ResellerQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResellerStatsUseCase for GetResellerStatsService<Q>
where
    Q: ResellerQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ResellerStats, GetResellerStatsError> {
        self.query
            .stats()
            .await
            .map_err(GetResellerStatsError::from)
    }
}
