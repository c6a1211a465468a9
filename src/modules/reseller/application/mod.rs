pub mod domain;
pub mod ports;
pub mod reseller_use_cases;
pub mod services;
