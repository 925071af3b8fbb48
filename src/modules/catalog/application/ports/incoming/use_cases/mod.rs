mod calculate_price;
mod get_service;
mod list_services;

pub use calculate_price::{
    CalculatePriceCommand, CalculatePriceCommandError, CalculatePriceError, CalculatePriceUseCase,
};
pub use get_service::{GetServiceError, GetServiceUseCase};
pub use list_services::{ListServicesError, ListServicesUseCase};
