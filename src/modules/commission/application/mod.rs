pub mod commission_use_cases;
pub mod domain;
pub mod ports;
pub mod services;
