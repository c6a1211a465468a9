mod delete_reseller;
mod export_resellers;
mod get_reseller_stats;
mod list_resellers;
mod update_reseller;

pub use delete_reseller::{DeleteResellerError, DeleteResellerUseCase};
pub use export_resellers::{ExportResellersError, ExportResellersUseCase};
pub use get_reseller_stats::{GetResellerStatsError, GetResellerStatsUseCase};
pub use list_resellers::{ListResellersError, ListResellersUseCase};
pub use update_reseller::{UpdateResellerError, UpdateResellerUseCase};
