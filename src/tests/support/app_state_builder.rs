use actix_web::web;
use std::sync::Arc;

use crate::modules::reseller::application::reseller_use_cases::ResellerUseCases;
use crate::modules::submission::application::ports::incoming::use_cases::SubmitApplicationUseCase;
use crate::tests::support::in_memory_store::InMemoryResellerStore;
use crate::tests::support::stubs::{FailingResellerStore, StubSubmitApplication};
use crate::AppState;

/// Starts from an unconfigured application: no database, and a submission
/// use case that reports missing configuration.
pub struct TestAppStateBuilder {
    reseller: Option<ResellerUseCases>,
    submit_application: Arc<dyn SubmitApplicationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            reseller: None,
            submit_application: Arc::new(StubSubmitApplication::not_configured()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_reseller(mut self, use_cases: ResellerUseCases) -> Self {
        self.reseller = Some(use_cases);
        self
    }

    /// Real services over an in-memory store.
    pub fn with_reseller_store(self, store: InMemoryResellerStore) -> Self {
        self.with_reseller(ResellerUseCases::new(store.clone(), store))
    }

    pub fn with_failing_reseller_store(self) -> Self {
        self.with_reseller(ResellerUseCases::new(
            FailingResellerStore,
            FailingResellerStore,
        ))
    }

    pub fn with_submit_application(
        mut self,
        use_case: impl SubmitApplicationUseCase + 'static,
    ) -> Self {
        self.submit_application = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            reseller: self.reseller,
            submit_application: self.submit_application,
        })
    }
}
