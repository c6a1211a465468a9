pub mod reseller_query_postgres;
pub mod reseller_repository_postgres;
pub mod sea_orm_entity;

pub use reseller_query_postgres::ResellerQueryPostgres;
pub use reseller_repository_postgres::ResellerRepositoryPostgres;
