use async_trait::async_trait;

use crate::modules::reseller::application::ports::incoming::use_cases::{
    DeleteResellerError, DeleteResellerUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::ResellerRepository;

pub struct DeleteResellerService<R>
where
    R: ResellerRepository,
{
    repository: R,
}

impl<R> DeleteResellerService<R>
where
    R: ResellerRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteResellerUseCase for DeleteResellerService<R>
where
    R: ResellerRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<(), DeleteResellerError> {
        self.repository
            .delete(id)
            .await
            .map_err(DeleteResellerError::from)
    }
}
