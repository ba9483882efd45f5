//! Product list for the committed filters of the current category.

use dioxus::prelude::*;

use common::{product_search::{PageSelection, ProductPage, ProductSearchRequest}, query_builder::build_query_params};
use crate::{
    api::store_api::search_products,
    components::{error_boundary::ComponentErrorDisplay, product_components::{pagination_controls::PaginationControls, product_card::ProductCard}, suspend_boundary::LoadingIndicator},
    pages::category_page::FilterContext,
};


#[derive(Copy, Clone)]
pub struct ProductResultsState {
    pub search_result: ReadSignal<Option<Result<ProductPage, ServerFnError>>>,
    pub current_page: ReadSignal<u64>,
    pub set_current_page: Callback<u64>,
}

#[component]
pub fn ProductResultsView() -> Element {
    let filter_context = use_context::<FilterContext>();
    let category_id = filter_context.category_id;
    let filters = filter_context.filters;

    let query = use_memo(move || build_query_params(&category_id.read(), &filters.read()));
    let mut page_selection = use_signal(PageSelection::default);
    let current_page = use_memo(move || page_selection.read().page_for(&query.read()));

    let mut search_result = use_resource(move || {
        let request = ProductSearchRequest::new(&query.read(), current_page());
        search_products(request)
    });
    // hide the previous page while the new one loads; the resource refetches on its own
    use_effect(move || {
        let _ = query.read();
        let _ = current_page.read();
        search_result.clear();
    });

    use_context_provider(move || ProductResultsState {
        search_result: search_result.into(),
        current_page: current_page.into(),
        set_current_page: Callback::new(move |page: u64| page_selection.set(PageSelection::new(query.peek().clone(), page))),
    });

    rsx! {
        div {
            id: "x-product-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                height: 100%;
                width: 100%;
                min-height: 0;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 44px;
                    gap: 12px;
                ",
                h2 {
                    style: "font-size: 18px; font-weight: 300; color: rgb(75, 87, 112); margin: 0;",
                    ProductHitCountString {}
                }
                div { style: "flex-grow: 1;" }
                PaginationControls {}
            }
            div {
                style: "flex-grow: 1; overflow-y: auto; min-height: 0;",
                ProductGrid {}
            }
        }
    }
}

#[component]
fn ProductGrid() -> Element {
    let results_state = use_context::<ProductResultsState>();
    let search_result = results_state.search_result.read();
    let page = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(page)) => page,
        None => return rsx! { LoadingIndicator { label: "Loading products..." } },
    };
    if page.products.is_empty() {
        return rsx! {
            div {
                style: "padding: 40px; font-size: 20px; color: rgba(0,0,0,0.6); text-align: center;",
                "No products match the selected filters."
            }
        };
    }

    rsx! {
        ul {
            id: "x-product-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 16px;
                padding: 4px;
            ",
            for product in page.products.iter().cloned() {
                li {
                    key: "{product.id}",
                    ProductCard { product }
                }
            }
        }
    }
}

#[component]
fn ProductHitCountString() -> Element {
    let results_state = use_context::<ProductResultsState>();
    let search_result = results_state.search_result.read();
    let hit_count_txt = match search_result.as_ref() {
        Some(Err(_)) => "! error".to_string(),
        Some(Ok(page)) => format!("{} products found", page.total),
        None => "...".to_string(),
    };
    rsx! { "{hit_count_txt}" }
}
