use dioxus::prelude::*;
use dioxus::logger::tracing;

use common::{filter_definition::{FilterDefinition, FilterType}, filter_state::{FilterState, FilterValue}};
use crate::{
    api::store_api::list_filter_definitions,
    components::{filter_components::{filter_sidebar::FilterSidebar, filter_slider::{FilterSlider, FilterSliderOpenButton}}, product_components::product_results_view::ProductResultsView, suspend_boundary::SuspendWrapper},
};


/// Filter state of the mounted category page, shared by both filter surfaces
/// and the product results view.
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub category_id: ReadSignal<String>,
    pub filters: ReadSignal<FilterState>,
    pub definitions: ReadSignal<Option<Result<Vec<FilterDefinition>, ServerFnError>>>,
    pub set_filter: Callback<(String, FilterValue)>,
    pub clear_filters: Callback<()>,
}


/// Category page
#[component]
pub fn CategoryPage(category_id: String) -> Element {
    rsx! {
        Title { "Shop - {category_id}" }
        CategoryPageRootComponent { category_id }
    }
}

#[component]
fn CategoryPageRootComponent(category_id: ReadSignal<String>) -> Element {
    let mut filters = use_signal(FilterState::new);
    let mut slider_open = use_signal(|| false);

    let mut definitions = use_resource(move || {
        let category_id = category_id.read().clone();
        list_filter_definitions(category_id)
    });
    // the route component is reused across categories: drop selections made for the previous one.
    // the resource refetches on its own; only the old catalog is hidden here
    let mut shown_category = use_signal(|| category_id.peek().clone());
    use_effect(move || {
        let category_id = category_id.read().clone();
        if *shown_category.peek() == category_id {
            return;
        }
        tracing::debug!("category changed to {category_id}: clearing filters");
        shown_category.set(category_id);
        filters.set(FilterState::new());
        slider_open.set(false);
        definitions.clear();
    });
    use_effect(move || {
        let definitions = definitions.read();
        let Some(Ok(definitions)) = definitions.as_ref() else { return };
        for definition in definitions.iter().filter(|d| d.filter_type == FilterType::Text) {
            tracing::warn!("filter \"{}\" ({}) has type TEXT and no storefront widget", definition.name, definition.id);
        }
        let mut pruned = filters.peek().clone();
        let removed = pruned.retain_known(definitions);
        if removed > 0 {
            tracing::debug!("dropped {removed} stale filter entries");
            filters.set(pruned);
        }
    });

    use_context_provider(move || FilterContext {
        category_id,
        filters: filters.into(),
        definitions: definitions.into(),
        set_filter: Callback::new(move |(name, value): (String, FilterValue)| {
            tracing::debug!("filter committed: {name} = {value:?}");
            filters.write().set_filter(name, value);
        }),
        clear_filters: Callback::new(move |_: ()| {
            tracing::debug!("all filters cleared");
            filters.write().clear_filters();
        }),
    });

    rsx! {
        div {
            id: "x-category-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            ",
            FilterSidebar {}

            div {
                id: "x-category-page-results-panel",
                style: "
                    flex-grow: 1;
                    min-width: 0;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 16px 24px;
                    gap: 12px;
                ",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 12px;
                    ",
                    h1 {
                        style: "font-size: 26px; font-weight: 500; color: #0F172A; margin: 0;",
                        "{category_id}"
                    }
                    div { style: "flex-grow: 1;" }
                    FilterSliderOpenButton { onclick: move |_| slider_open.set(true) }
                }
                SuspendWrapper { ProductResultsView {} }
            }

            if slider_open() {
                FilterSlider { on_close: move |_| slider_open.set(false) }
            }
        }
    }
}
