use async_trait::async_trait;
use uuid::Uuid;

/// Caller identity as confirmed by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Expired, malformed, revoked or otherwise rejected credential.
    #[error("Invalid or expired credential")]
    InvalidCredential,

    /// The identity service could not give an answer.
    #[error("Identity service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError>;
}
