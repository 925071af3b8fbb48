pub mod service_options;
pub mod services;
