use std::sync::Arc;

use crate::commission::application::ports::incoming::use_cases::{
    AddUpdateUseCase, GetCommissionUseCase, GetKanbanUseCase, ListCommissionsUseCase,
    TagCommissionUseCase, UpdateCommissionUseCase,
};

#[derive(Clone)]
pub struct CommissionUseCases {
    pub list: Arc<dyn ListCommissionsUseCase + Send + Sync>,
    pub kanban: Arc<dyn GetKanbanUseCase + Send + Sync>,
    pub get: Arc<dyn GetCommissionUseCase + Send + Sync>,
    pub add_update: Arc<dyn AddUpdateUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCommissionUseCase + Send + Sync>,
    pub tag: Arc<dyn TagCommissionUseCase + Send + Sync>,
}
