use async_trait::async_trait;

use crate::modules::reseller::application::ports::incoming::use_cases::{
    ListResellersError, ListResellersUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    PageRequest, ResellerListFilter, ResellerPage, ResellerQuery,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListResellersService<Q>
where
    Q: ResellerQuery,
{
    query: Q,
}

impl<Q> ListResellersService<Q>
where
    Q: ResellerQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListResellersUseCase for ListResellersService<Q>
where
    Q: ResellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ResellerListFilter,
        page: PageRequest,
    ) -> Result<ResellerPage, ListResellersError> {
        let result = self.query.list(&filter, page.range()).await?;

        Ok(ResellerPage::new(result, page))
    }
}
