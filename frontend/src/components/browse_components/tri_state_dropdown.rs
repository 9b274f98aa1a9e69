//! Dropdown over one filter dimension where every option cycles through
//! Neutral -> Included -> Excluded -> Neutral on click.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::{MdAdd, MdRemove};
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;

use common::tri_state::{FilterOption, TriState, TriStateSelection};


#[component]
pub fn TriStateFilterDropdown<T: Clone + PartialEq + Ord + 'static>(
    label: ReadSignal<String>,
    options: ReadSignal<Vec<FilterOption<T>>>,
    selection: ReadSignal<TriStateSelection<T>>,
    on_cycle: Callback<T>,
    #[props(default = 1)] grid_cols: u32,
) -> Element {
    let mut is_open = use_signal(|| false);

    let display_label = use_memo(move || {
        let count = selection.read().selection_count();
        if count > 0 { format!("{} ({})", label.read(), count) } else { label.read().clone() }
    });
    let border_color = use_memo(move || if is_open() { "#4ade80" } else { "#3f3f46" });
    let panel_width = if grid_cols > 1 { "min(600px, 90vw)" } else { "220px" };
    let panel_columns = format!("repeat({grid_cols}, 1fr)");

    rsx! {
        div {
            style: "position: relative;",
            label {
                style: "display:block; font-size: 11px; font-weight: 700; text-transform: uppercase; color: #71717a; margin-bottom: 6px;",
                "{label}"
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    let open = *is_open.read();
                    is_open.set(!open);
                },
                style: "
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: #27272a;
                    border: 1px solid {border_color()};
                    border-radius: 6px;
                    padding: 8px 12px;
                    font-size: 13px;
                    color: white;
                    cursor: pointer;
                ",
                span {
                    style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{display_label}"
                }
                Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px; color: #71717a; flex-shrink: 0;" }
            }

            if is_open() {
                // click-away backdrop
                div {
                    style: "position: fixed; inset: 0; z-index: 40;",
                    onclick: move |_| is_open.set(false),
                }
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0;
                        margin-top: 4px;
                        width: {panel_width};
                        max-height: 320px;
                        overflow-y: auto;
                        background: #18181b;
                        border: 1px solid #3f3f46;
                        border-radius: 8px;
                        box-shadow: 0 12px 30px rgba(0,0,0,0.5);
                        padding: 12px;
                        z-index: 50;
                        display: grid;
                        grid-template-columns: {panel_columns};
                        gap: 2px 8px;
                    ",
                    for option in options.read().iter().cloned() {
                        TriStateOptionRow {
                            key: "{option.label}",
                            state: selection.read().state_of(&option.id),
                            label: option.label.clone(),
                            onclick: {
                                let id = option.id.clone();
                                move |_| on_cycle.call(id.clone())
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TriStateOptionRow(
    state: TriState,
    label: ReadSignal<String>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let (box_style, text_style) = match state {
        TriState::Included => (
            "background: #4ade80; color: black;",
            "color: #4ade80;",
        ),
        TriState::Excluded => (
            "background: #f87171; color: white;",
            "color: #f87171; text-decoration: line-through;",
        ),
        TriState::Neutral => ("background: #52525b;", "color: #a1a1aa;"),
    };
    rsx! {
        button {
            onclick: move |e| onclick.call(e),
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 6px 8px;
                border: none;
                background: none;
                border-radius: 4px;
                cursor: pointer;
                text-align: left;
                width: 100%;
            ",
            div {
                style: "
                    height: 16px;
                    width: 16px;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 2px;
                    {box_style}
                ",
                match state {
                    TriState::Included => rsx! { Icon { icon: MdAdd, style: "width: 11px; height: 11px;" } },
                    TriState::Excluded => rsx! { Icon { icon: MdRemove, style: "width: 11px; height: 11px;" } },
                    TriState::Neutral => rsx! {},
                }
            }
            span {
                style: "
                    font-size: 12px;
                    font-weight: 500;
                    text-transform: uppercase;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    {text_style}
                ",
                "{label}"
            }
        }
    }
}
