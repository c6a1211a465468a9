use async_trait::async_trait;

use crate::modules::reseller::application::ports::outgoing::reseller_repository::ResellerRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteResellerError {
    #[error("Reseller not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResellerRepositoryError> for DeleteResellerError {
    fn from(err: ResellerRepositoryError) -> Self {
        match err {
            ResellerRepositoryError::NotFound => DeleteResellerError::NotFound,
            ResellerRepositoryError::DatabaseError(msg) => DeleteResellerError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteResellerUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), DeleteResellerError>;
}
