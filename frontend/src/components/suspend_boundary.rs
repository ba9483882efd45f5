use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Loading indicator while children are suspended, error box if they fail.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! { LoadingIndicator {} },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 20px;
                color: rgba(0,0,0,0.6);
                font-size: 18px;
            ",
            "{label}"
        }
    }
}
