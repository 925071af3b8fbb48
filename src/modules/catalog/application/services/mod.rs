mod calculate_price_service;
mod get_service_service;
mod list_services_service;

pub use calculate_price_service::CalculatePriceService;
pub use get_service_service::GetServiceService;
pub use list_services_service::ListServicesService;
