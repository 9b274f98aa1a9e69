//! Chapter reader: a vertical strip of page images with prev/next chapter
//! navigation derived from the series' chapter list.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_navigation_icons::{
    MdArrowBack, MdChevronLeft, MdChevronRight, MdRefresh,
};

use common::catalog::{Chapter, chapter_neighbors};

use crate::api::catalog_api::{get_comic, get_chapter_pages, list_chapters};
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


#[component]
pub fn ReaderPage(slug: String, chapter_id: String) -> Element {
    rsx! {
        Title { "Komiz - Reader" }
        div {
            style: "width: 100%; min-height: 100vh; background: #09090b;",
            SuspendWrapper {
                ComponentErrorBoundary {
                    ReaderView { slug, chapter_id }
                }
            }
        }
    }
}

#[component]
fn ReaderView(slug: ReadSignal<String>, chapter_id: ReadSignal<String>) -> Element {
    let comic = use_resource(move || get_comic(slug.read().clone())).suspend()?.cloned();
    let chapters = use_resource(move || list_chapters(slug.read().clone())).suspend()?.cloned();
    let mut pages_resource =
        use_resource(move || get_chapter_pages(chapter_id.read().clone()));
    let pages = pages_resource.suspend()?.cloned();

    let comic = match comic {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(comic) => comic,
    };
    let chapters = match chapters {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(chapters) => chapters,
    };
    let pages = match pages {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(pages) => pages,
    };

    let current_id = chapter_id.read().clone();
    let (prev_chapter, next_chapter) = chapter_neighbors(&chapters, &current_id);
    let current_label = chapters
        .iter()
        .find(|c| c.id == current_id)
        .map(Chapter::display_title)
        .unwrap_or_else(|| "Chapter".to_string());

    rsx! {
        Title { "Komiz - {comic.title} - {current_label}" }

        // reader top bar
        div {
            style: "
                position: sticky;
                top: 0;
                z-index: 20;
                display: flex;
                align-items: center;
                gap: 14px;
                background: rgba(24,24,27,0.95);
                border-bottom: 1px solid #27272a;
                padding: 10px 20px;
            ",
            Link {
                to: Route::ComicPage { slug: slug.read().clone() },
                div {
                    style: "display: flex; align-items: center; color: #a1a1aa;",
                    Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
                }
            }
            Link {
                to: Route::HomePage {},
                div {
                    style: "display: flex; align-items: center; color: #a1a1aa;",
                    Icon { icon: MdHome, style: "width: 20px; height: 20px;" }
                }
            }
            div {
                style: "min-width: 0;",
                div {
                    style: "color: white; font-size: 14px; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{comic.title}"
                }
                div {
                    style: "color: #71717a; font-size: 12px;",
                    "{current_label}"
                }
            }
            div { style: "flex: 1;" }
            ChapterStepLinks {
                slug: slug.read().clone(),
                prev_chapter: prev_chapter.clone(),
                next_chapter: next_chapter.clone(),
            }
        }

        if pages.is_empty() {
            div {
                style: "text-align: center; padding: 100px 20px; color: #71717a;",
                p {
                    style: "font-size: 15px; margin: 0;",
                    "No pages found for this chapter."
                }
                button {
                    onclick: move |_| pages_resource.restart(),
                    style: "
                        display: inline-flex;
                        align-items: center;
                        gap: 6px;
                        margin-top: 14px;
                        background: none;
                        border: 1px solid #3f3f46;
                        border-radius: 8px;
                        padding: 8px 16px;
                        color: #4ade80;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    Icon { icon: MdRefresh, style: "width: 15px; height: 15px;" }
                    "Retry"
                }
            }
        } else {
            div {
                style: "max-width: 860px; margin: 0 auto;",
                for (index, page_url) in pages.iter().enumerate() {
                    img {
                        key: "{index}-{page_url}",
                        src: "{page_url}",
                        alt: "Page {index + 1}",
                        loading: "lazy",
                        style: "display: block; width: 100%;",
                    }
                }
            }

            // end-of-chapter bar
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 16px;
                    padding: 40px 20px 60px 20px;
                ",
                if let Some(next) = next_chapter {
                    Link {
                        to: Route::ReaderPage { slug: slug.read().clone(), chapter_id: next.id.clone() },
                        div {
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 6px;
                                background: #16a34a;
                                color: white;
                                border-radius: 8px;
                                padding: 11px 22px;
                                font-size: 14px;
                                font-weight: 600;
                            ",
                            "Next: {next.display_title()}"
                            Icon { icon: MdChevronRight, style: "width: 18px; height: 18px;" }
                        }
                    }
                } else {
                    Link {
                        to: Route::ComicPage { slug: slug.read().clone() },
                        div {
                            style: "
                                background: #27272a;
                                color: #d4d4d8;
                                border-radius: 8px;
                                padding: 11px 22px;
                                font-size: 14px;
                                font-weight: 600;
                            ",
                            "Return to Series"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChapterStepLinks(
    slug: ReadSignal<String>,
    prev_chapter: ReadSignal<Option<Chapter>>,
    next_chapter: ReadSignal<Option<Chapter>>,
) -> Element {
    let step_style = "
        display: flex;
        align-items: center;
        gap: 2px;
        border: 1px solid #3f3f46;
        border-radius: 8px;
        padding: 6px 12px;
        font-size: 13px;
        color: #d4d4d8;
    ";
    let disabled_style = "
        display: flex;
        align-items: center;
        gap: 2px;
        border: 1px solid #27272a;
        border-radius: 8px;
        padding: 6px 12px;
        font-size: 13px;
        color: #3f3f46;
    ";
    rsx! {
        div {
            style: "display: flex; gap: 8px;",
            if let Some(prev) = prev_chapter.read().clone() {
                Link {
                    to: Route::ReaderPage { slug: slug.read().clone(), chapter_id: prev.id.clone() },
                    div {
                        style: step_style,
                        Icon { icon: MdChevronLeft, style: "width: 16px; height: 16px;" }
                        "Prev"
                    }
                }
            } else {
                div {
                    style: disabled_style,
                    Icon { icon: MdChevronLeft, style: "width: 16px; height: 16px;" }
                    "Prev"
                }
            }
            if let Some(next) = next_chapter.read().clone() {
                Link {
                    to: Route::ReaderPage { slug: slug.read().clone(), chapter_id: next.id.clone() },
                    div {
                        style: step_style,
                        "Next"
                        Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
                    }
                }
            } else {
                div {
                    style: disabled_style,
                    "Next"
                    Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
                }
            }
        }
    }
}
