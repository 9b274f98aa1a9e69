use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // while any child is suspended, the loading view renders instead
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:#a1a1aa; font-size: 20px; border: 1px solid #3f3f46; padding: 10px 18px; border-radius: 8px; margin: 15px; background: #18181b;",
            "Loading..."
        }
    }
}

/// Pulsing placeholder grid shown while a result list loads.
#[component]
pub fn SkeletonCardGrid(count: usize) -> Element {
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                gap: 20px;
                width: 100%;
            ",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "x-skeleton-pulse",
                    div { style: "aspect-ratio: 2/3; background: #18181b; border-radius: 8px; margin-bottom: 10px;" }
                    div { style: "height: 14px; background: #18181b; border-radius: 4px; width: 75%; margin-bottom: 6px;" }
                    div { style: "height: 11px; background: #18181b; border-radius: 4px; width: 50%;" }
                }
            }
        }
    }
}
