pub mod alert_service;
pub mod price_service;
