mod add_update_service;
mod get_commission_service;
mod get_kanban_service;
mod list_commissions_service;
mod tag_commission_service;
mod update_commission_service;

pub use add_update_service::AddUpdateService;
pub use get_commission_service::GetCommissionService;
pub use get_kanban_service::GetKanbanService;
pub use list_commissions_service::ListCommissionsService;
pub use tag_commission_service::TagCommissionService;
pub use update_commission_service::UpdateCommissionService;
