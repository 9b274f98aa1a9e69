pub mod home_page;
pub mod browse_page;
pub mod comic_page;
pub mod reader_page;
