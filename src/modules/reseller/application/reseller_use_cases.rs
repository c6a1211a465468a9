use std::sync::Arc;

use crate::modules::reseller::application::ports::incoming::use_cases::{
    DeleteResellerUseCase, ExportResellersUseCase, GetResellerStatsUseCase, ListResellersUseCase,
    UpdateResellerUseCase,
};
use crate::modules::reseller::application::ports::outgoing::reseller_query::ResellerQuery;
use crate::modules::reseller::application::ports::outgoing::reseller_repository::ResellerRepository;
use crate::modules::reseller::application::services::{
    DeleteResellerService, ExportResellersService, GetResellerStatsService, ListResellersService,
    UpdateResellerService,
};

#[derive(Clone)]
pub struct ResellerUseCases {
    pub list: Arc<dyn ListResellersUseCase + Send + Sync>,
    pub export: Arc<dyn ExportResellersUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateResellerUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteResellerUseCase + Send + Sync>,
    pub stats: Arc<dyn GetResellerStatsUseCase + Send + Sync>,
}

impl ResellerUseCases {
    /// Wires every admin use case over one query adapter and one repository adapter.
    pub fn new<Q, R>(query: Q, repository: R) -> Self
    where
        Q: ResellerQuery + Clone + 'static,
        R: ResellerRepository + Clone + 'static,
    {
        Self {
            list: Arc::new(ListResellersService::new(query.clone())),
            export: Arc::new(ExportResellersService::new(query.clone())),
            update: Arc::new(UpdateResellerService::new(repository.clone())),
            delete: Arc::new(DeleteResellerService::new(repository)),
            stats: Arc::new(GetResellerStatsService::new(query)),
        }
    }
}
