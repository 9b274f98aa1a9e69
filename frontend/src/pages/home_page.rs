use dioxus::prelude::*;

use common::browse_const::HOME_SECTION_SIZE;
use common::catalog_query::CatalogQuery;

use crate::api::catalog_api::search_comics;
use crate::components::comic_card::ComicCard;
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::suspend_boundary::SkeletonCardGrid;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Komiz - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 40px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            HomeSection {
                section_title: "Latest Updates".to_string(),
                query: CatalogQuery::latest_updates(),
            }
            HomeSection {
                section_title: "New Series".to_string(),
                query: CatalogQuery::new_series(),
            }
            HomeSection {
                section_title: "Popular".to_string(),
                query: CatalogQuery::popular(),
            }
        }
    }
}

/// One preset-query strip of cards with a "view all" link into the browse
/// page carrying the same query.
#[component]
fn HomeSection(section_title: ReadSignal<String>, query: ReadSignal<CatalogQuery>) -> Element {
    rsx! {
        section {
            div {
                style: "
                    display: flex;
                    align-items: baseline;
                    justify-content: space-between;
                    margin-bottom: 16px;
                ",
                h2 {
                    style: "font-size: 22px; font-weight: 700; color: white; margin: 0;",
                    "{section_title}"
                }
                Link {
                    to: Route::browse_with_query(query.read().clone()),
                    span { style: "font-size: 13px; color: #4ade80;", "View all" }
                }
            }
            SuspenseBoundary {
                fallback: |_s: SuspenseContext| rsx! { SkeletonCardGrid { count: 6 } },
                ComponentErrorBoundary {
                    HomeSectionGrid { query }
                }
            }
        }
    }
}

#[component]
fn HomeSectionGrid(query: ReadSignal<CatalogQuery>) -> Element {
    let result = use_resource(move || {
        let q = query.read().clone();
        search_comics(q, 1, HOME_SECTION_SIZE)
    })
    .suspend()?
    .cloned();

    let page = match result {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };

    if page.items.is_empty() {
        return rsx! {
            div {
                style: "color: #52525b; font-size: 14px; padding: 12px 0;",
                "Nothing here yet."
            }
        };
    }

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
                gap: 20px;
            ",
            for comic in page.items.iter().cloned() {
                ComicCard { key: "{comic.id}", comic: comic.clone() }
            }
        }
    }
}
