//! Chapter list endpoint.

use common::catalog::Chapter;

use crate::remote::komiz_client::get_json;

pub async fn list_chapters(slug: String) -> anyhow::Result<Vec<Chapter>> {
    get_json(&format!("/comics/{}/chapters", slug), &[]).await
}
