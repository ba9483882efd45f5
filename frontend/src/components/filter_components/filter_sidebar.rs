//! Always-visible filter column on wide screens.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdFilterList};

use crate::components::{filter_components::facet_list::{ActiveFilterBadge, ClearAllButton, FacetLayout, FacetList}, suspend_boundary::SuspendWrapper};


#[component]
pub fn FilterSidebar() -> Element {
    rsx! {
        aside {
            id: "x-filter-sidebar",
            class: "x-filter-sidebar",
            style: "
                flex-direction: column;
                gap: 8px;
                width: 280px;
                min-width: 280px;
                height: 100%;
                overflow-y: auto;
                padding: 16px 12px;
                background-color: white;
                border-right: 1px solid rgb(214, 214, 214);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding-bottom: 8px;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                ",
                Icon { icon: MdFilterList, style: "width: 22px; height: 22px; color: #0F172A;" }
                h2 { style: "font-size: 18px; font-weight: 600; margin: 0;", "Filters" }
                ActiveFilterBadge {}
                div { style: "flex-grow: 1;" }
                ClearAllButton {}
            }
            SuspendWrapper {
                FacetList { layout: FacetLayout::Sidebar }
            }
        }
    }
}
