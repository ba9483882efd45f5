//! Top bar of every storefront page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHome};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn StoreHeader() -> Element {
    rsx! {
        div {
            id: "x-store-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            header {
                id: "x-store-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 60px;
                    flex-shrink: 0;
                    padding: 0 20px;
                    background-color: #1C212D;
                    color: white;
                ",
                Link {
                    to: Route::HomePage {},
                    span {
                        style: "display: flex; align-items: center; gap: 8px; color: white;",
                        Icon { icon: MdHome, style: "width: 26px; height: 26px;" }
                        span { style: "font-size: 20px; font-weight: 500;", "Shop" }
                    }
                }
            }
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 0;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
