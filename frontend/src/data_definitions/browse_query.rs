//! Router-facing wrapper around `CatalogQuery`.
//!
//! `Display` writes the browse page's query string, `FromQuery` hydrates it
//! back on page load and on back/forward navigation. Both directions go
//! through the shared codec, so the URL is the human-readable form of the
//! query state and parsing never fails.

use std::fmt::Display;

use dioxus::router::routable::FromQuery;
use serde::{Deserialize, Serialize};

use common::catalog_query::CatalogQuery;
use common::query_codec::{parse_query, serialize_query};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BrowseQuery(pub CatalogQuery);

impl From<CatalogQuery> for BrowseQuery {
    fn from(query: CatalogQuery) -> Self {
        BrowseQuery(query)
    }
}

// Never empty: sort_by and order are always emitted.
impl Display for BrowseQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serialize_query(&self.0))
    }
}

impl FromQuery for BrowseQuery {
    fn from_query(query: &str) -> Self {
        BrowseQuery(parse_query(query))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog_query::{ComicType, SortKey, SortOrder};

    #[test]
    fn display_and_from_query_round_trip() {
        let mut query = CatalogQuery::with_search("demon");
        query.types.include(ComicType::Manhwa);
        query.genres.exclude(3);
        query.sort_by = SortKey::Title;
        query.order = SortOrder::Asc;
        let wrapped = BrowseQuery(query);
        let url_form = wrapped.to_string();
        assert_eq!(BrowseQuery::from_query(&url_form), wrapped);
    }

    #[test]
    fn from_query_never_fails_on_garbage() {
        let parsed = BrowseQuery::from_query("%%%&&&sort_by=???");
        assert_eq!(parsed.0.sort_by, SortKey::UpdatedAt);
    }
}
