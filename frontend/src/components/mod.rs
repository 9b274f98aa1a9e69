pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod auth_modal;
pub mod comic_card;
pub mod chapter_list;
pub mod browse_components;
