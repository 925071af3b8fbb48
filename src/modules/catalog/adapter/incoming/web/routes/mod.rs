pub mod calculate_price;
pub mod get_service;
pub mod list_services;
pub mod terms_of_service;

pub use calculate_price::{calculate_price_handler, CalculatePriceRequestDto};
pub use get_service::get_service_handler;
pub use list_services::list_services_handler;
pub use terms_of_service::terms_of_service_handler;
