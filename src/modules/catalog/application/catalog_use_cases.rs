use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    CalculatePriceUseCase, GetServiceUseCase, ListServicesUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list: Arc<dyn ListServicesUseCase + Send + Sync>,
    pub get: Arc<dyn GetServiceUseCase + Send + Sync>,
    pub calculate_price: Arc<dyn CalculatePriceUseCase + Send + Sync>,
}
