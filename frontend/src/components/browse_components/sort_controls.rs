//! Sort key select plus order toggle.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward};

use common::catalog_query::{CatalogQuery, SortKey, SortOrder};


#[component]
pub fn SortControls(draft: Signal<CatalogQuery>) -> Element {
    let sort_by = use_memo(move || draft.read().sort_by);
    let order = use_memo(move || draft.read().order);
    let order_title = use_memo(move || match order() {
        SortOrder::Asc => "Ascending",
        SortOrder::Desc => "Descending",
    });

    rsx! {
        div {
            label {
                style: "display:block; font-size: 11px; font-weight: 700; text-transform: uppercase; color: #71717a; margin-bottom: 6px;",
                "Sort By"
            }
            div {
                style: "display: flex; gap: 8px;",
                select {
                    value: "{sort_by().as_str()}",
                    onchange: move |event| {
                        // the select only offers known keys, anything else keeps the default
                        draft.write().sort_by = event.value().parse().unwrap_or_default();
                    },
                    style: "
                        flex: 1;
                        background: #27272a;
                        border: 1px solid #3f3f46;
                        border-radius: 6px;
                        padding: 8px 12px;
                        font-size: 13px;
                        color: white;
                    ",
                    for key in SortKey::ALL {
                        option {
                            value: "{key.as_str()}",
                            selected: key == sort_by(),
                            "{key.label()}"
                        }
                    }
                }
                button {
                    title: "{order_title}",
                    onclick: move |_| {
                        let flipped = draft.peek().order.flipped();
                        draft.write().order = flipped;
                    },
                    style: "
                        background: #27272a;
                        border: 1px solid #3f3f46;
                        border-radius: 6px;
                        padding: 0 10px;
                        color: #a1a1aa;
                        cursor: pointer;
                    ",
                    if order() == SortOrder::Asc {
                        Icon { icon: MdArrowUpward, style: "width: 15px; height: 15px;" }
                    } else {
                        Icon { icon: MdArrowDownward, style: "width: 15px; height: 15px;" }
                    }
                }
            }
        }
    }
}
