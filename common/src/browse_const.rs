//! Shared tunables for browsing, quick search and home page strips.

/// Result page size on the browse page.
pub const BROWSE_PAGE_SIZE: u64 = 30;

/// Items per home page section strip.
pub const HOME_SECTION_SIZE: u64 = 12;

/// Quiet period before a typed search fires a fetch.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Navbar quick search: suggestion count cap and minimum trimmed input.
pub const QUICK_SEARCH_LIMIT: u64 = 5;
pub const QUICK_SEARCH_MIN_CHARS: usize = 2;

/// First page number the remote API expects.
pub const FIRST_PAGE: u64 = 1;
