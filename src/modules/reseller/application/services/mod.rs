pub mod delete_reseller_service;
pub mod export_resellers_service;
pub mod get_reseller_stats_service;
pub mod list_resellers_service;
pub mod update_reseller_service;

pub use delete_reseller_service::DeleteResellerService;
pub use export_resellers_service::ExportResellersService;
pub use get_reseller_stats_service::GetResellerStatsService;
pub use list_resellers_service::ListResellersService;
pub use update_reseller_service::UpdateResellerService;
