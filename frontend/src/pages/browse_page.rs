//! Catalog browsing: the tri-state filter panel, the URL-synchronized query
//! draft and the race-safe result feed.
//!
//! The draft query drives fetches immediately; the address bar is updated
//! only on an explicit Apply (or Enter), so back/forward navigation walks
//! applied filter states.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;
use dioxus_free_icons::icons::md_navigation_icons::MdRefresh;

use common::browse_const::{BROWSE_PAGE_SIZE, FIRST_PAGE, SEARCH_DEBOUNCE_MS};
use common::catalog_query::CatalogQuery;

use crate::api::catalog_api::list_genres;
use crate::components::browse_components::filter_panel::FilterPanel;
use crate::components::comic_card::ComicCard;
use crate::components::suspend_boundary::SkeletonCardGrid;
use crate::data_definitions::browse_query::BrowseQuery;
use crate::data_definitions::catalog_feed::{FailurePolicy, use_catalog_feed};
use crate::data_definitions::debounce::{Debouncer, TimeoutScheduler};
use crate::routes::Route;


#[component]
pub fn BrowsePage(filters: BrowseQuery) -> Element {
    rsx! {
        Title { "Komiz - Browse" }
        BrowseRootComponent { query: filters.0.clone() }
    }
}

#[component]
fn BrowseRootComponent(query: ReadSignal<CatalogQuery>) -> Element {
    let mut draft = use_signal(|| query.read().clone());
    let mut search_text = use_signal(|| query.read().search.clone());
    // the URL changed out from under us (back/forward): rehydrate the draft
    use_effect(move || {
        let new_query = query.read().clone();
        if *draft.peek() != new_query {
            search_text.set(new_query.search.clone());
            draft.set(new_query);
        }
    });

    let feed = use_catalog_feed(FailurePolicy::KeepPrevious);
    // any draft change issues exactly one fetch
    use_effect(move || {
        let q = draft.read().clone();
        feed.refresh(q, FIRST_PAGE, BROWSE_PAGE_SIZE);
    });

    let genres = use_resource(move || list_genres());
    let genre_list = use_memo(move || match genres.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        // the dropdown just stays empty while genres load or fail
        _ => Vec::new(),
    });

    let mut show_filters = use_signal(|| true);
    let debouncer =
        use_hook(|| Rc::new(Debouncer::new(TimeoutScheduler, SEARCH_DEBOUNCE_MS)));

    let apply = {
        let debouncer = Rc::clone(&debouncer);
        Callback::new(move |_: ()| {
            debouncer.cancel();
            let mut applied = draft.peek().clone();
            applied.search = search_text.peek().trim().to_string();
            draft.set(applied.clone());
            navigator().push(Route::browse_with_query(applied));
        })
    };

    let reset_all = {
        let debouncer = Rc::clone(&debouncer);
        Callback::new(move |_: ()| {
            debouncer.cancel();
            search_text.set(String::new());
            draft.write().reset_all();
        })
    };

    let search_oninput = {
        let debouncer = Rc::clone(&debouncer);
        move |event: Event<FormData>| {
            let text = event.value();
            search_text.set(text.clone());
            // commit into the draft only after the quiet period
            debouncer.schedule(move || {
                let trimmed = text.trim().to_string();
                if draft.peek().search != trimmed {
                    draft.write().search = trimmed;
                }
            });
        }
    };

    let items = feed.items;
    let loading = feed.loading;
    let error = feed.error;
    let result_count_txt = use_memo(move || {
        if loading() { "Searching...".to_string() } else { format!("{} Results", items.read().len()) }
    });
    let filter_button_color = use_memo(move || if show_filters() { "white" } else { "#71717a" });

    rsx! {
        div {
            id: "x-browse-container",
            style: "width: 100%; max-width: 1280px; margin: 0 auto; padding: 32px 24px; box-sizing: border-box;",

            // search bar row
            div {
                style: "display: flex; gap: 14px; margin-bottom: 24px;",
                div {
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        background: #18181b;
                        border: 1px solid #3f3f46;
                        border-radius: 8px;
                        padding: 11px 14px;
                    ",
                    Icon { icon: MdSearch, style: "width: 19px; height: 19px; color: #71717a; flex-shrink: 0;" }
                    input {
                        r#type: "text",
                        placeholder: "Search...",
                        style: "flex: 1; background: transparent; border: none; outline: none; color: white; font-size: 15px;",
                        value: "{search_text}",
                        oninput: search_oninput,
                        onkeydown: move |event: Event<KeyboardData>| {
                            if event.key() == Key::Enter {
                                apply.call(());
                            }
                        },
                    }
                }
                button {
                    onclick: move |_| {
                        let shown = *show_filters.read();
                        show_filters.set(!shown);
                    },
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        background: #18181b;
                        border: 1px solid #3f3f46;
                        border-radius: 8px;
                        padding: 0 16px;
                        font-size: 14px;
                        color: {filter_button_color()};
                        cursor: pointer;
                    ",
                    Icon { icon: MdFilterList, style: "width: 17px; height: 17px;" }
                    "Filters"
                }
            }

            if show_filters() {
                FilterPanel {
                    draft,
                    genres: genre_list,
                    on_apply: apply,
                    on_reset: reset_all,
                }
            }

            // results header
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px;",
                h2 {
                    style: "font-size: 19px; font-weight: 700; color: white; margin: 0;",
                    "{result_count_txt}"
                }
            }

            if let Some(error_txt) = error() {
                div {
                    id: "x-browse-error-strip",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        background: rgba(248,113,113,0.08);
                        border: 1px solid #f87171;
                        border-radius: 8px;
                        padding: 10px 16px;
                        margin-bottom: 20px;
                    ",
                    span {
                        style: "color: #fca5a5; font-size: 13px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "Search failed: {error_txt}"
                    }
                    button {
                        onclick: move |_| {
                            feed.refresh(draft.peek().clone(), FIRST_PAGE, BROWSE_PAGE_SIZE);
                        },
                        style: "display: flex; align-items: center; gap: 6px; background: none; border: none; color: #4ade80; font-size: 13px; cursor: pointer; flex-shrink: 0;",
                        Icon { icon: MdRefresh, style: "width: 15px; height: 15px;" }
                        "Retry"
                    }
                }
            }

            if loading() {
                SkeletonCardGrid { count: 10 }
            } else if !items.read().is_empty() {
                div {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                        gap: 24px;
                    ",
                    for comic in items() {
                        ComicCard { key: "{comic.id}", comic: comic.clone() }
                    }
                }
            } else {
                div {
                    style: "
                        text-align: center;
                        padding: 80px 20px;
                        color: #52525b;
                        border: 1px solid #27272a;
                        border-radius: 8px;
                        background: rgba(24,24,27,0.2);
                    ",
                    Icon { icon: MdSearch, style: "width: 44px; height: 44px; opacity: 0.5;" }
                    p {
                        style: "font-size: 16px; font-weight: 500; color: #a1a1aa; margin: 14px 0 0 0;",
                        "No comics found matching your criteria."
                    }
                    if draft.read().has_active_filters() {
                        button {
                            onclick: move |_| reset_all.call(()),
                            style: "margin-top: 14px; background: none; border: none; color: #4ade80; font-size: 14px; cursor: pointer;",
                            "Reset All Filters"
                        }
                    }
                }
            }
        }
    }
}
