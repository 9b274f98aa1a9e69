//! Top navigation bar: logo, quick search with suggestion dropdown, session
//! controls. Renders the routed page below itself.

use std::rc::Rc;

use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdSearch};
use dioxus_free_icons::icons::md_social_icons::MdPerson;

use common::browse_const::{
    FIRST_PAGE, QUICK_SEARCH_LIMIT, QUICK_SEARCH_MIN_CHARS, SEARCH_DEBOUNCE_MS,
};
use common::catalog::CatalogItem;
use common::catalog_query::CatalogQuery;
use common::text_highlight::highlight_matches;

use crate::components::auth_modal::AuthModal;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::catalog_feed::{FailurePolicy, use_catalog_feed};
use crate::data_definitions::debounce::{Debouncer, TimeoutScheduler};
use crate::routes::Route;
use crate::session::use_session;


/// Shared navbar layout component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    padding: 0 24px;
                    height: 60px;
                    background: #0f1115;
                    border-bottom: 1px solid #27272a;
                    position: sticky;
                    top: 0;
                    z-index: 60;
                ",

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "font-size: 20px; font-weight: 800; color: #4ade80; letter-spacing: 0.05em;",
                        "KOMIZ"
                    }
                }
                Link {
                    to: Route::browse_default(),
                    span { style: "font-size: 14px; color: #a1a1aa;", "Browse" }
                }

                div { style: "flex-grow: 1; max-width: 520px;", QuickSearch {} }
                div { style: "flex-grow: 1;" }

                SessionControls {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; background: #121212;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn QuickSearch() -> Element {
    let mut search_text = use_signal(String::new);
    let mut dropdown_open = use_signal(|| false);
    // failed or superseded lookups empty the dropdown instead of showing
    // stale suggestions
    let feed = use_catalog_feed(FailurePolicy::Clear);
    let suggestions = feed.items;
    let debouncer =
        use_hook(|| Rc::new(Debouncer::new(TimeoutScheduler, SEARCH_DEBOUNCE_MS)));

    use_effect(move || {
        let has_suggestions = !suggestions.read().is_empty();
        dropdown_open.set(has_suggestions);
    });

    let oninput = {
        let debouncer = Rc::clone(&debouncer);
        move |event: Event<FormData>| {
            let text = event.value();
            search_text.set(text.clone());
            if text.trim().len() < QUICK_SEARCH_MIN_CHARS {
                debouncer.cancel();
                feed.clear();
                dropdown_open.set(false);
                return;
            }
            debouncer.schedule(move || {
                let query = CatalogQuery::with_search(text.trim());
                feed.refresh(query, FIRST_PAGE, QUICK_SEARCH_LIMIT);
            });
        }
    };

    let onkeydown = {
        let debouncer = Rc::clone(&debouncer);
        move |event: Event<KeyboardData>| {
            if event.key() == Key::Enter && !search_text.peek().trim().is_empty() {
                debouncer.cancel();
                dropdown_open.set(false);
                navigator().push(Route::browse_with_search(search_text.peek().trim()));
            }
        }
    };

    rsx! {
        div {
            style: "position: relative;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    background: #18181b;
                    border: 1px solid #3f3f46;
                    border-radius: 8px;
                    padding: 7px 12px;
                ",
                Icon { icon: MdSearch, style: "width: 17px; height: 17px; color: #71717a; flex-shrink: 0;" }
                input {
                    r#type: "text",
                    placeholder: "Quick search...",
                    style: "flex: 1; background: transparent; border: none; outline: none; color: white; font-size: 14px;",
                    value: "{search_text}",
                    oninput: oninput,
                    onkeydown: onkeydown,
                }
            }

            if dropdown_open() {
                div {
                    style: "position: fixed; inset: 0; z-index: 40;",
                    onclick: move |_| dropdown_open.set(false),
                }
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        margin-top: 6px;
                        background: #18181b;
                        border: 1px solid #3f3f46;
                        border-radius: 8px;
                        box-shadow: 0 12px 30px rgba(0,0,0,0.5);
                        overflow: hidden;
                        z-index: 50;
                    ",
                    for item in suggestions.read().iter().cloned() {
                        SuggestionRow {
                            key: "{item.id}",
                            item: item.clone(),
                            query: search_text.read().trim().to_string(),
                            on_pick: move |_| dropdown_open.set(false),
                        }
                    }
                    button {
                        onclick: move |_| {
                            dropdown_open.set(false);
                            navigator().push(Route::browse_with_search(search_text.peek().trim()));
                        },
                        style: "
                            width: 100%;
                            background: none;
                            border: none;
                            border-top: 1px solid #27272a;
                            padding: 10px;
                            font-size: 13px;
                            color: #4ade80;
                            cursor: pointer;
                        ",
                        "Advanced search"
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionRow(
    item: ReadSignal<CatalogItem>,
    query: ReadSignal<String>,
    on_pick: Callback<()>,
) -> Element {
    let item = item.read().clone();
    let spans = highlight_matches(&item.title, &query.read());
    rsx! {
        Link {
            to: Route::ComicPage { slug: item.slug.clone() },
            onclick: move |_| on_pick.call(()),
            div {
                class: "x-suggestion-row",
                style: "display: flex; align-items: center; gap: 10px; padding: 8px 12px;",
                if let Some(cover_url) = item.cover_url.clone() {
                    img {
                        src: "{cover_url}",
                        style: "width: 32px; height: 44px; object-fit: cover; border-radius: 4px; flex-shrink: 0;",
                    }
                }
                span {
                    style: "font-size: 13px; color: #d4d4d8; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    for (i, piece) in spans.iter().enumerate() {
                        if piece.is_highlighted {
                            mark {
                                key: "{i}",
                                style: "background: #facc15; color: black; border-radius: 2px; padding: 0 1px;",
                                "{piece.text}"
                            }
                        } else {
                            span { key: "{i}", "{piece.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionControls() -> Element {
    let session = use_session();
    let mut show_auth_modal = use_signal(|| false);
    let mut show_profile_dropdown = use_signal(|| false);

    let user = session.user();

    // avoid flashing the signed-out button while the stored session is
    // still being validated
    if *session.restoring.read() {
        return rsx! { div { style: "width: 36px; height: 36px;" } };
    }

    rsx! {
        if let Some(user) = user {
            div {
                style: "position: relative;",
                button {
                    onclick: move |_| {
                        let open = *show_profile_dropdown.read();
                        show_profile_dropdown.set(!open);
                    },
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        background: #27272a;
                        border: 1px solid #3f3f46;
                        cursor: pointer;
                    ",
                    Icon { icon: MdPerson, style: "width: 20px; height: 20px; color: #4ade80;" }
                }
                if show_profile_dropdown() {
                    div {
                        style: "position: fixed; inset: 0; z-index: 40;",
                        onclick: move |_| show_profile_dropdown.set(false),
                    }
                    div {
                        style: "
                            position: absolute;
                            top: 100%;
                            right: 0;
                            margin-top: 6px;
                            min-width: 200px;
                            background: #18181b;
                            border: 1px solid #3f3f46;
                            border-radius: 8px;
                            box-shadow: 0 12px 30px rgba(0,0,0,0.5);
                            z-index: 50;
                            overflow: hidden;
                        ",
                        div {
                            style: "padding: 12px; border-bottom: 1px solid #27272a;",
                            div { style: "font-size: 14px; font-weight: 600; color: white;", "{user.username}" }
                            div { style: "font-size: 12px; color: #71717a;", "{user.email}" }
                        }
                        button {
                            onclick: move |_| {
                                show_profile_dropdown.set(false);
                                session.sign_out();
                            },
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 8px;
                                width: 100%;
                                padding: 10px 12px;
                                background: none;
                                border: none;
                                font-size: 13px;
                                color: #f87171;
                                cursor: pointer;
                            ",
                            Icon { icon: MdExitToApp, style: "width: 16px; height: 16px;" }
                            "Sign Out"
                        }
                    }
                }
            }
        } else {
            button {
                onclick: move |_| show_auth_modal.set(true),
                style: "
                    background: #27272a;
                    border: 1px solid #3f3f46;
                    border-radius: 8px;
                    padding: 8px 16px;
                    font-size: 13px;
                    color: white;
                    cursor: pointer;
                ",
                "Sign In"
            }
        }

        if show_auth_modal() {
            AuthModal { on_close: move |_: ()| show_auth_modal.set(false) }
        }
    }
}
