use async_trait::async_trait;

use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    PatchResellerData, ResellerRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateResellerError {
    #[error("{0}")]
    Validation(String),

    #[error("Reseller not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResellerRepositoryError> for UpdateResellerError {
    fn from(err: ResellerRepositoryError) -> Self {
        match err {
            ResellerRepositoryError::NotFound => UpdateResellerError::NotFound,
            ResellerRepositoryError::DatabaseError(msg) => UpdateResellerError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateResellerUseCase: Send + Sync {
    async fn execute(&self, id: i64, data: PatchResellerData) -> Result<(), UpdateResellerError>;
}
