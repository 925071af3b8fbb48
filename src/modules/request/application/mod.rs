pub mod domain;
pub mod ports;
pub mod request_use_cases;
pub mod services;
