pub mod browse_query;
pub mod debounce;
pub mod catalog_feed;
