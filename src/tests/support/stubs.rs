use async_trait::async_trait;

use crate::auth::application::ports::outgoing::identity_verifier::{
    Identity, IdentityError, IdentityVerifier,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::{
    QueryPage, QueryRange, ResellerListFilter, ResellerQuery, ResellerQueryError, ResellerStats,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::{
    NewReseller, PatchResellerData, ResellerRepository, ResellerRepositoryError,
};
use crate::modules::submission::application::domain::entities::{
    ApplicationInput, SubmissionReport,
};
use crate::modules::submission::application::ports::incoming::use_cases::{
    SubmitApplicationError, SubmitApplicationUseCase,
};

/* --------------------------------------------------
 * Identity
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubIdentityVerifier {
    result: Result<Identity, IdentityError>,
}

impl StubIdentityVerifier {
    pub fn accepting(identity: Identity) -> Self {
        Self {
            result: Ok(identity),
        }
    }

    pub fn failing(err: IdentityError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn verify(&self, _token: &str) -> Result<Identity, IdentityError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Submission
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitApplication {
    result: Result<SubmissionReport, SubmitApplicationError>,
}

impl StubSubmitApplication {
    pub fn returning(result: Result<SubmissionReport, SubmitApplicationError>) -> Self {
        Self { result }
    }

    pub fn not_configured() -> Self {
        Self::returning(Err(SubmitApplicationError::NotConfigured))
    }
}

#[async_trait]
impl SubmitApplicationUseCase for StubSubmitApplication {
    async fn execute(
        &self,
        _input: ApplicationInput,
    ) -> Result<SubmissionReport, SubmitApplicationError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Record store that is always down
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct FailingResellerStore;

#[async_trait]
impl ResellerQuery for FailingResellerStore {
    async fn list(
        &self,
        _filter: &ResellerListFilter,
        _range: QueryRange,
    ) -> Result<QueryPage, ResellerQueryError> {
        Err(ResellerQueryError::DatabaseError("connection refused".into()))
    }

    async fn stats(&self) -> Result<ResellerStats, ResellerQueryError> {
        Err(ResellerQueryError::DatabaseError("connection refused".into()))
    }
}

#[async_trait]
impl ResellerRepository for FailingResellerStore {
    async fn insert(&self, _data: NewReseller) -> Result<i64, ResellerRepositoryError> {
        Err(ResellerRepositoryError::DatabaseError("connection refused".into()))
    }

    async fn patch(&self, _id: i64, _data: PatchResellerData) -> Result<(), ResellerRepositoryError> {
        Err(ResellerRepositoryError::DatabaseError("connection refused".into()))
    }

    async fn delete(&self, _id: i64) -> Result<(), ResellerRepositoryError> {
        Err(ResellerRepositoryError::DatabaseError("connection refused".into()))
    }
}
