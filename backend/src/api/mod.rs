pub mod catalog;
pub mod auth;
