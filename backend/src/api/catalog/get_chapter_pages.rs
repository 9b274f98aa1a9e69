//! Reader page images endpoint.

use crate::remote::komiz_client::get_json;

/// Page image URLs for one chapter, in reading order.
pub async fn get_chapter_pages(chapter_id: String) -> anyhow::Result<Vec<String>> {
    get_json(&format!("/chapters/{}/pages", chapter_id), &[]).await
}
