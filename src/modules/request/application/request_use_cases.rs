use std::sync::Arc;

use crate::request::application::ports::incoming::use_cases::{
    AcceptRequestUseCase, GetRequestUseCase, ListMyRequestsUseCase, SubmitRequestUseCase,
};

#[derive(Clone)]
pub struct RequestUseCases {
    pub submit: Arc<dyn SubmitRequestUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyRequestsUseCase + Send + Sync>,
    pub get: Arc<dyn GetRequestUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptRequestUseCase + Send + Sync>,
}
