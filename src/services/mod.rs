pub mod account_service;
pub mod connection_service;
pub mod locator_service;
pub mod view_service;
