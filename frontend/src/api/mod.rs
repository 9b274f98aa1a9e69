pub mod catalog_api;
pub mod auth_api;
