//! Client API calls for catalog endpoints.

use common::catalog::{CatalogItem, CatalogPage, Chapter, Genre};
use common::catalog_query::CatalogQuery;
use dioxus::prelude::*;


#[server]
pub async fn search_comics(
    query: CatalogQuery,
    page: u64,
    size: u64,
) -> Result<CatalogPage<CatalogItem>, ServerFnError> {
    let x = backend::api::catalog::search_comics(query, page, size).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_genres() -> Result<Vec<Genre>, ServerFnError> {
    let x = backend::api::catalog::list_genres().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_comic(slug: String) -> Result<CatalogItem, ServerFnError> {
    let x = backend::api::catalog::get_comic(slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_chapters(slug: String) -> Result<Vec<Chapter>, ServerFnError> {
    let x = backend::api::catalog::list_chapters(slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_chapter_pages(chapter_id: String) -> Result<Vec<String>, ServerFnError> {
    let x = backend::api::catalog::get_chapter_pages(chapter_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
