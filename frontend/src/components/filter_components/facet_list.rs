//! Widget list shared by the filter sidebar and the filter slider.

use dioxus::prelude::*;

use common::{facet_widget::{FacetWidget, renderable_facets}, filter_state::{FilterValue, RangeValue}};
use crate::{
    components::{error_boundary::ComponentErrorDisplay, filter_components::{dropdown_facet::DropdownFacet, range_facet::RangeFacet}, suspend_boundary::LoadingIndicator},
    pages::category_page::FilterContext,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetLayout {
    Sidebar,
    Slider,
}

impl FacetLayout {
    pub fn facet_padding(&self) -> &'static str {
        match self {
            FacetLayout::Sidebar => "10px 4px",
            FacetLayout::Slider => "14px 16px",
        }
    }

    pub fn option_font_size(&self) -> &'static str {
        match self {
            FacetLayout::Sidebar => "15px",
            FacetLayout::Slider => "18px",
        }
    }
}


/// One widget per catalog definition of the current category.
#[component]
pub fn FacetList(layout: FacetLayout) -> Element {
    let filter_context = use_context::<FilterContext>();
    let filters = filter_context.filters;
    let set_filter = filter_context.set_filter;

    let definitions = filter_context.definitions.read();
    let definitions = match definitions.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(definitions)) => definitions.clone(),
        None => return rsx! { LoadingIndicator { label: "Loading filters..." } },
    };
    if renderable_facets(&definitions).is_empty() {
        return rsx! {
            div {
                style: "padding: 10px; color: rgba(0,0,0,0.6);",
                "No filters for this category."
            }
        };
    }

    let widgets = renderable_facets(&definitions).into_iter().map(|(definition, widget)| {
        let name = definition.name.clone();
        match widget {
            FacetWidget::Dropdown => {
                let selected = filters.read().categorical(&name).to_vec();
                rsx! {
                    DropdownFacet {
                        key: "{definition.id}",
                        definition: definition.clone(),
                        selected,
                        layout,
                        on_commit: move |values: Vec<String>| set_filter((name.clone(), FilterValue::Categorical(values))),
                    }
                }
            }
            FacetWidget::Range => {
                let committed = filters.read().range(&name);
                rsx! {
                    RangeFacet {
                        key: "{definition.id}",
                        definition: definition.clone(),
                        committed,
                        layout,
                        on_commit: move |value: RangeValue| set_filter((name.clone(), FilterValue::Range(value))),
                    }
                }
            }
        }
    }).collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-facet-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",
            {widgets.into_iter()}
        }
    }
}


/// Number of applied selections; both surfaces show this same value.
#[component]
pub fn ActiveFilterBadge() -> Element {
    let filter_context = use_context::<FilterContext>();
    let active_count = use_memo(move || filter_context.filters.read().active_count());
    rsx! {
        if active_count() > 0 {
            span {
                class: "x-active-filter-badge",
                style: "
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    min-width: 22px;
                    height: 22px;
                    padding: 0 6px;
                    border-radius: 1000px;
                    background-color: #4F46E5;
                    color: white;
                    font-size: 13px;
                    font-weight: 600;
                ",
                "{active_count}"
            }
        }
    }
}

#[component]
pub fn ClearAllButton() -> Element {
    let filter_context = use_context::<FilterContext>();
    let has_filters = use_memo(move || !filter_context.filters.read().is_empty());
    rsx! {
        button {
            disabled: !has_filters(),
            style: "
                border: none;
                background: none;
                color: #4F46E5;
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| filter_context.clear_filters.call(()),
            "Clear All"
        }
    }
}
