//! Series detail page: cover, metadata, synopsis, genre chips and the
//! chapter list. Genre chips link back into browsing with that genre
//! pre-included.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdBook;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;

use common::catalog::sort_chapters_by_number;

use crate::api::catalog_api::{get_comic, list_chapters};
use crate::components::chapter_list::{ChapterList, ChapterListVariant};
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


#[component]
pub fn ComicPage(slug: String) -> Element {
    rsx! {
        Title { "Komiz - Series" }
        div {
            style: "width: 100%; max-width: 1100px; margin: 0 auto; padding: 32px 24px; box-sizing: border-box;",
            SuspendWrapper {
                ComponentErrorBoundary {
                    ComicDetail { slug }
                }
            }
        }
    }
}

#[component]
fn ComicDetail(slug: ReadSignal<String>) -> Element {
    let comic = use_resource(move || get_comic(slug.read().clone())).suspend()?.cloned();
    let chapters = use_resource(move || list_chapters(slug.read().clone())).suspend()?.cloned();

    let comic = match comic {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(comic) => comic,
    };
    let chapters = match chapters {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(chapters) => chapters,
    };

    // "Start Reading" targets the lowest-numbered chapter
    let first_chapter = {
        let mut sorted = chapters.clone();
        sort_chapters_by_number(&mut sorted);
        sorted.first().cloned()
    };

    rsx! {
        Title { "Komiz - {comic.title}" }
        div {
            style: "display: flex; gap: 32px; flex-wrap: wrap;",

            // cover column
            div {
                style: "flex-shrink: 0; width: 240px;",
                if let Some(cover_url) = comic.cover_url.clone() {
                    img {
                        src: "{cover_url}",
                        alt: "{comic.title}",
                        style: "width: 100%; aspect-ratio: 3 / 4.2; object-fit: cover; border-radius: 8px; border: 1px solid #27272a;",
                    }
                } else {
                    div {
                        style: "
                            width: 100%;
                            aspect-ratio: 3 / 4.2;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: #18181b;
                            border: 1px solid #27272a;
                            border-radius: 8px;
                            color: #52525b;
                            font-size: 13px;
                        ",
                        "No Cover"
                    }
                }
                if let Some(chapter) = first_chapter {
                    Link {
                        to: Route::ReaderPage { slug: slug.read().clone(), chapter_id: chapter.id.clone() },
                        div {
                            style: "
                                display: flex;
                                align-items: center;
                                justify-content: center;
                                gap: 8px;
                                margin-top: 16px;
                                background: #16a34a;
                                color: white;
                                border-radius: 8px;
                                padding: 11px 0;
                                font-size: 14px;
                                font-weight: 600;
                            ",
                            Icon { icon: MdBook, style: "width: 17px; height: 17px;" }
                            "Start Reading"
                        }
                    }
                }
            }

            // metadata column
            div {
                style: "flex: 1; min-width: 300px;",
                h1 {
                    style: "font-size: 28px; font-weight: 800; color: white; margin: 0;",
                    "{comic.title}"
                }
                if !comic.alt_titles.is_empty() {
                    p {
                        style: "color: #71717a; font-size: 13px; margin: 6px 0 0 0;",
                        {comic.alt_titles.iter().map(|t| t.title.as_str()).collect::<Vec<_>>().join(" / ")}
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 14px; margin-top: 14px; font-size: 14px;",
                    span {
                        style: "display: flex; align-items: center; gap: 4px; color: #facc15;",
                        Icon { icon: MdStar, style: "width: 16px; height: 16px;" }
                        "{comic.rating_label()}"
                    }
                    span {
                        style: "color: #d4d4d8; text-transform: capitalize;",
                        "{comic.status}"
                    }
                    span {
                        style: "
                            background: rgba(74,222,128,0.12);
                            color: #4ade80;
                            border-radius: 4px;
                            padding: 2px 8px;
                            font-size: 12px;
                            font-weight: 600;
                            text-transform: capitalize;
                        ",
                        "{comic.comic_type}"
                    }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 16px;",
                    for genre in comic.genres.iter().cloned() {
                        Link {
                            key: "{genre.id}",
                            to: Route::browse_with_genre(genre.id),
                            span {
                                class: "x-genre-chip",
                                style: "
                                    display: inline-block;
                                    background: #27272a;
                                    color: #d4d4d8;
                                    border-radius: 999px;
                                    padding: 4px 12px;
                                    font-size: 12px;
                                ",
                                "{genre.name}"
                            }
                        }
                    }
                }
                if let Some(description) = comic.description.clone() {
                    p {
                        style: "color: #a1a1aa; font-size: 14px; line-height: 1.7; margin-top: 20px; white-space: pre-line;",
                        "{description}"
                    }
                }
            }
        }

        ChapterList {
            slug: slug.read().clone(),
            chapters: chapters.clone(),
            variant: ChapterListVariant::Detailed,
        }
    }
}
