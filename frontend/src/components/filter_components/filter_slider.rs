//! Slide-over filter panel for narrow screens.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_navigation_icons::MdClose}};

use crate::components::{filter_components::facet_list::{ActiveFilterBadge, ClearAllButton, FacetLayout, FacetList}, suspend_boundary::SuspendWrapper};


/// Widgets commit as they change; "Apply Filters" only closes the panel.
#[component]
pub fn FilterSlider(on_close: Callback<()>) -> Element {
    rsx! {
        // BACKDROP
        div {
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100%;
                height: 100%;
                z-index: 999;
                background-color: rgba(0,0,0,0.35);
            ",
            onclick: move |_| on_close(()),
        }
        // PANEL
        div {
            id: "x-filter-slider",
            style: "
                position: fixed;
                top: 0px;
                right: 0px;
                height: 100%;
                width: min(420px, 100%);
                z-index: 1000;
                display: flex;
                flex-direction: column;
                background-color: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.2);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding: 16px;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                ",
                h2 { style: "font-size: 20px; font-weight: 600; margin: 0;", "Filters" }
                ActiveFilterBadge {}
                div { style: "flex-grow: 1;" }
                ClearAllButton {}
                button {
                    title: "Close",
                    style: "border: none; background: none; cursor: pointer; display: flex;",
                    onclick: move |_| on_close(()),
                    Icon { icon: MdClose, style: "width: 24px; height: 24px; color: black;" }
                }
            }
            div {
                style: "flex-grow: 1; overflow-y: auto;",
                SuspendWrapper {
                    FacetList { layout: FacetLayout::Slider }
                }
            }
            div {
                style: "padding: 16px; border-top: 1px solid rgba(0,0,0,0.1);",
                button {
                    style: "
                        width: 100%;
                        border: none;
                        border-radius: 8px;
                        padding: 12px;
                        background-color: #4F46E5;
                        color: white;
                        font-size: 17px;
                        cursor: pointer;
                    ",
                    onclick: move |_| on_close(()),
                    "Apply Filters"
                }
            }
        }
    }
}

#[component]
pub fn FilterSliderOpenButton(onclick: Callback<()>) -> Element {
    rsx! {
        button {
            class: "x-filter-slider-open-button",
            style: "
                align-items: center;
                gap: 6px;
                border: 1px solid rgba(0,0,0,0.5);
                border-radius: 1000px;
                background-color: white;
                padding: 6px 12px;
                font-size: 15px;
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
            "Filters"
            ActiveFilterBadge {}
        }
    }
}
