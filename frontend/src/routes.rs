use dioxus::prelude::*;

use common::catalog_query::CatalogQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::browse_query::BrowseQuery;
use crate::pages::browse_page::BrowsePage;
use crate::pages::comic_page::ComicPage;
use crate::pages::home_page::HomePage;
use crate::pages::reader_page::ReaderPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/browse?:..filters")]
    BrowsePage {
        filters: BrowseQuery,
    },


    #[route("/comic/:slug")]
    ComicPage { slug: String },

    #[route("/comic/:slug/:chapter_id")]
    ReaderPage { slug: String, chapter_id: String },

}

impl Route {
    pub fn browse_default() -> Self {
        Self::BrowsePage { filters: BrowseQuery(CatalogQuery::default()) }
    }

    pub fn browse_with_query(query: CatalogQuery) -> Self {
        Self::BrowsePage { filters: BrowseQuery(query) }
    }

    pub fn browse_with_search(text: impl Into<String>) -> Self {
        Self::BrowsePage { filters: BrowseQuery(CatalogQuery::with_search(text)) }
    }

    pub fn browse_with_genre(genre_id: u32) -> Self {
        Self::BrowsePage { filters: BrowseQuery(CatalogQuery::with_included_genre(genre_id)) }
    }
}
