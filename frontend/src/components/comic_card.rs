//! Result grid card for one series.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;

use common::catalog::CatalogItem;

use crate::routes::Route;


#[component]
pub fn ComicCard(comic: ReadSignal<CatalogItem>) -> Element {
    let comic = comic.read().clone();
    rsx! {
        Link {
            to: Route::ComicPage { slug: comic.slug.clone() },
            div {
                class: "x-comic-card",
                style: "
                    display: flex;
                    flex-direction: column;
                    cursor: pointer;
                ",
                div {
                    style: "
                        position: relative;
                        aspect-ratio: 2/3;
                        overflow: hidden;
                        border-radius: 8px;
                        background: #18181b;
                        border: 1px solid #27272a;
                        margin-bottom: 10px;
                    ",
                    if let Some(cover_url) = comic.cover_url.clone() {
                        img {
                            src: "{cover_url}",
                            alt: "{comic.title}",
                            loading: "lazy",
                            style: "width: 100%; height: 100%; object-fit: cover;",
                        }
                    } else {
                        div {
                            style: "display:flex; height: 100%; align-items: center; justify-content: center; color: #3f3f46;",
                            "No Cover"
                        }
                    }
                    span {
                        style: "
                            position: absolute;
                            top: 8px;
                            left: 8px;
                            background: rgba(0,0,0,0.6);
                            color: white;
                            font-size: 10px;
                            font-weight: 700;
                            text-transform: uppercase;
                            padding: 2px 8px;
                            border-radius: 4px;
                            border: 1px solid rgba(255,255,255,0.1);
                        ",
                        "{comic.comic_type}"
                    }
                    div {
                        style: "
                            position: absolute;
                            bottom: 0; left: 0; right: 0;
                            padding: 6px 8px;
                            display: flex;
                            justify-content: space-between;
                            font-size: 12px;
                            color: white;
                            background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
                        ",
                        span {
                            style: "display:flex; align-items:center; gap: 3px;",
                            Icon { icon: MdStar, style: "width: 13px; height: 13px; color: #facc15;" }
                            "{comic.rating_label()}"
                        }
                        span { style: "color: #d4d4d8; text-transform: capitalize;", "{comic.status}" }
                    }
                }
                h3 {
                    style: "
                        font-size: 14px;
                        font-weight: 600;
                        color: white;
                        margin: 0;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    title: "{comic.title}",
                    "{comic.title}"
                }
                p {
                    style: "
                        font-size: 11px;
                        color: #71717a;
                        margin: 4px 0 0 0;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{comic.genre_line()}"
                }
            }
        }
    }
}
