//! Chapter list for the series page. One component, two renderings picked
//! by an explicit variant instead of parallel implementations.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward};

use common::catalog::{Chapter, sort_chapters_by_number};
use common::catalog_query::SortOrder;

use crate::routes::Route;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterListVariant {
    /// Number and title only.
    Compact,
    /// Adds the scanlation group and upload date columns.
    Detailed,
}

#[component]
pub fn ChapterList(
    slug: ReadSignal<String>,
    chapters: ReadSignal<Vec<Chapter>>,
    #[props(default = ChapterListVariant::Detailed)] variant: ChapterListVariant,
) -> Element {
    let mut sort_order = use_signal(|| SortOrder::Desc);

    let sorted_chapters = use_memo(move || {
        let mut list = chapters.read().clone();
        sort_chapters_by_number(&mut list);
        if *sort_order.read() == SortOrder::Desc {
            list.reverse();
        }
        list
    });

    rsx! {
        div {
            id: "x-chapter-list",
            style: "margin-top: 32px;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 8px 16px;
                    font-size: 11px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #71717a;
                ",
                button {
                    onclick: move |_| {
                        let flipped = sort_order.peek().flipped();
                        sort_order.set(flipped);
                    },
                    style: "display: flex; align-items: center; gap: 4px; background: none; border: none; color: inherit; cursor: pointer; font: inherit; text-transform: inherit;",
                    if sort_order() == SortOrder::Desc {
                        Icon { icon: MdArrowDownward, style: "width: 13px; height: 13px;" }
                    } else {
                        Icon { icon: MdArrowUpward, style: "width: 13px; height: 13px;" }
                    }
                    "Chapter"
                }
                if variant == ChapterListVariant::Detailed {
                    span { "Group / Date" }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 2px;",
                for chapter in sorted_chapters.read().iter().cloned() {
                    ChapterRow {
                        key: "{chapter.id}",
                        slug: slug.read().clone(),
                        chapter: chapter.clone(),
                        variant,
                    }
                }
            }

            if chapters.read().is_empty() {
                div {
                    style: "padding: 24px; text-align: center; color: #52525b; font-size: 14px;",
                    "No chapters yet."
                }
            }
        }
    }
}

#[component]
fn ChapterRow(
    slug: ReadSignal<String>,
    chapter: ReadSignal<Chapter>,
    variant: ChapterListVariant,
) -> Element {
    let chapter = chapter.read().clone();
    let group_name =
        chapter.group.as_ref().map(|g| g.name.clone()).unwrap_or("Unknown group".to_string());
    rsx! {
        Link {
            to: Route::ReaderPage { slug: slug.read().clone(), chapter_id: chapter.id.clone() },
            div {
                class: "x-chapter-row",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: #18181b;
                    border: 1px solid #27272a;
                    border-radius: 6px;
                    padding: 10px 16px;
                ",
                span {
                    style: "font-size: 14px; color: white; font-weight: 500;",
                    "{chapter.display_title()}"
                }
                if variant == ChapterListVariant::Detailed {
                    span {
                        style: "font-size: 12px; color: #71717a;",
                        "{group_name} · {chapter.created_at}"
                    }
                }
            }
        }
    }
}
