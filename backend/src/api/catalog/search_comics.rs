//! Catalog search endpoint.

use common::catalog::{CatalogItem, CatalogPage};
use common::catalog_query::CatalogQuery;

use crate::remote::komiz_client::get_json;

/// Run one catalog search. Include/exclude sets are passed through as
/// separate comma-joined parameters; the remote side does the actual
/// filtering, this client never filters locally.
pub async fn search_comics(
    query: CatalogQuery,
    page: u64,
    size: u64,
) -> anyhow::Result<CatalogPage<CatalogItem>> {
    let mut params = query.to_param_pairs();
    params.push(("page", page.to_string()));
    params.push(("size", size.to_string()));
    get_json("/comics", &params).await
}
