//! Catalog API route handlers and module exports.

mod search_comics;
pub use search_comics::search_comics;

mod list_genres;
pub use list_genres::list_genres;

mod get_comic;
pub use get_comic::get_comic;

mod list_chapters;
pub use list_chapters::list_chapters;

mod get_chapter_pages;
pub use get_chapter_pages::get_chapter_pages;
