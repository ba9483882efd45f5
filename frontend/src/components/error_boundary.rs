//! Error boundaries for render failures and failed store calls.

use dioxus::prelude::*;
use dioxus::logger::tracing;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render error in {}: {:?}", boundary_name.peek().as_str(), err);
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            padding: 30px;
                        ",
                        h1 { style: "color: darkred; font-size: 36px; margin: 0;", "Something went wrong" }
                        p { style: "color: rgba(0,0,0,0.7); font-size: 18px; margin: 0;", "Section: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            span { style: "color: #4F46E5; font-size: 18px;", "Back to the shop" }
                        }
                        pre {
                            style: "color: black; border: 1px solid rgba(0,0,0,0.2); padding: 10px; border-radius: 5px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 6px 14px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Inline error box used where a store call failed.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 16px;
            ",
            h2 { style: "color: darkred; font-size: 20px; margin: 0;", "Could not load" }
            pre {
                style: "color: darkred; border: 1px solid rgba(139,0,0,0.4); padding: 10px; border-radius: 5px; margin: 0; text-wrap: auto; max-width: 100%; max-height: 240px; overflow-y: auto; font-size: 12px;",
                "{error_txt}"
            }
            {children}
        }
    }
}
