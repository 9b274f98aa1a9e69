//! Error boundary components for rendering failures.

use dioxus::prelude::*;

/// Page-level boundary: anything that throws below it replaces the whole
/// routed area with a diagnostic view and a way back home.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "max-width: 720px; margin: 48px auto; padding: 0 20px;",
                        h1 {
                            style: "color:#f87171; font-size: 34px; margin: 0 0 12px 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color:#fca5a5; font-size: 15px; border: 1px solid #f87171; padding: 10px; border-radius: 8px;",
                            "Boundary: {boundary_name}"
                        }
                        pre {
                            style: "color:#e4e4e7; background: #18181b; border: 1px solid #3f3f46; padding: 12px; border-radius: 8px; text-wrap: auto; overflow-y: auto; max-height: 420px;",
                            "{_err:#?}"
                        }
                        a {
                            href: "/",
                            style: "display: inline-block; color:#4ade80; font-size: 15px; border: 1px solid #4ade80; padding: 10px 18px; border-radius: 8px; margin-top: 12px;",
                            "Return to Home Page"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Section-level boundary with a retry affordance that clears the error and
/// re-renders the children.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error_txt = match _err.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#4ade80; font-size: 14px; border: 1px solid #4ade80; background: none; cursor: pointer; padding: 8px 18px; border-radius: 8px; margin-top: 10px;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px 0",

            h2 {
                style: "color:#f87171; font-size: 20px; margin: 0 0 10px 0;",
                "This section failed to load"
            }

            pre {
                style: "color:#fca5a5; background: #18181b; border: 1px solid #3f3f46; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
