use async_trait::async_trait;

use crate::modules::submission::application::domain::entities::{
    ApplicationInput, MissingFields, SubmissionReport,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitApplicationError {
    #[error("{0}")]
    Invalid(String),

    #[error("No submission destination is configured")]
    NotConfigured,

    #[error("Every configured destination failed")]
    AllSinksFailed(SubmissionReport),
}

impl From<MissingFields> for SubmitApplicationError {
    fn from(missing: MissingFields) -> Self {
        SubmitApplicationError::Invalid(missing.to_string())
    }
}

#[async_trait]
pub trait SubmitApplicationUseCase: Send + Sync {
    async fn execute(
        &self,
        input: ApplicationInput,
    ) -> Result<SubmissionReport, SubmitApplicationError>;
}
