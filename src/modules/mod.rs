pub mod auth;
pub mod crm;
pub mod reseller;
pub mod submission;
