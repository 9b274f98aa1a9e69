//! The browse page's filter panel: sort controls, the three tri-state
//! dimensions, Apply and Reset All.

use dioxus::prelude::*;

use common::catalog::Genre;
use common::catalog_query::{CatalogQuery, status_options, type_options};
use common::tri_state::FilterOption;

use crate::components::browse_components::sort_controls::SortControls;
use crate::components::browse_components::tri_state_dropdown::TriStateFilterDropdown;


#[component]
pub fn FilterPanel(
    draft: Signal<CatalogQuery>,
    genres: ReadSignal<Vec<Genre>>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> Element {
    let types_selection = use_memo(move || draft.read().types.clone());
    let statuses_selection = use_memo(move || draft.read().statuses.clone());
    let genres_selection = use_memo(move || draft.read().genres.clone());
    let genre_options = use_memo(move || {
        genres.read().iter().map(|g| FilterOption::new(g.id, g.name.clone())).collect::<Vec<_>>()
    });

    rsx! {
        div {
            id: "x-browse-filter-panel",
            style: "
                background: #0f1115;
                border: 1px solid #27272a;
                border-radius: 8px;
                padding: 24px;
                margin-bottom: 32px;
            ",
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 24px;
                ",
                SortControls { draft }
                TriStateFilterDropdown {
                    label: "Type".to_string(),
                    options: type_options(),
                    selection: types_selection,
                    on_cycle: move |id| { draft.write().types.cycle(id); },
                }
                TriStateFilterDropdown {
                    label: "Status".to_string(),
                    options: status_options(),
                    selection: statuses_selection,
                    on_cycle: move |id| { draft.write().statuses.cycle(id); },
                }
                TriStateFilterDropdown {
                    label: "Genres".to_string(),
                    options: genre_options,
                    selection: genres_selection,
                    on_cycle: move |id| { draft.write().genres.cycle(id); },
                    grid_cols: 4,
                }
            }

            div {
                style: "
                    margin-top: 24px;
                    padding-top: 16px;
                    border-top: 1px solid #27272a;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                ",
                button {
                    onclick: move |_| on_reset.call(()),
                    style: "font-size: 13px; color: #71717a; background: none; border: none; cursor: pointer;",
                    "Reset All"
                }
                button {
                    onclick: move |_| on_apply.call(()),
                    style: "
                        background: #4ade80;
                        color: black;
                        font-weight: 700;
                        font-size: 13px;
                        padding: 8px 32px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    "Apply Filters"
                }
            }
        }
    }
}
