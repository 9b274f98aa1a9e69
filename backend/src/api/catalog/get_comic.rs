//! Series detail endpoint.

use common::catalog::CatalogItem;

use crate::remote::komiz_client::get_json;

/// Fetch one series by slug (or id), including its chapter list.
pub async fn get_comic(slug: String) -> anyhow::Result<CatalogItem> {
    get_json(&format!("/comics/{}", slug), &[]).await
}
