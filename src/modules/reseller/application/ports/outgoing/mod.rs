pub mod reseller_query;
pub mod reseller_repository;
