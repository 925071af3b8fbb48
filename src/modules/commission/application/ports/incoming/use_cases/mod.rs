mod add_update;
mod get_commission;
mod get_kanban;
mod list_commissions;
mod tag_commission;
mod update_commission;

pub use add_update::{
    AddUpdateCommand, AddUpdateCommandError, AddUpdateError, AddUpdateUseCase, AddedUpdate,
};
pub use get_commission::{GetCommissionError, GetCommissionUseCase};
pub use get_kanban::{GetKanbanError, GetKanbanUseCase};
pub use list_commissions::{ListCommissionsError, ListCommissionsUseCase};
pub use tag_commission::{
    TagCommissionCommand, TagCommissionCommandError, TagCommissionError, TagCommissionUseCase,
};
pub use update_commission::{
    CommissionState, UpdateCommissionCommand, UpdateCommissionCommandError,
    UpdateCommissionError, UpdateCommissionUseCase,
};
