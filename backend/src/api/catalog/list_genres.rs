//! Genre catalog for the browse page filter dropdown.

use common::catalog::Genre;

use crate::remote::komiz_client::get_json;

pub async fn list_genres() -> anyhow::Result<Vec<Genre>> {
    get_json("/genres", &[]).await
}
