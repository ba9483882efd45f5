//! Client API calls for the store endpoints.

use common::{filter_admin::{CreateFilterDefinitions, NewFilterDefinition}, filter_definition::FilterDefinition, product_search::{ProductPage, ProductSearchRequest}};
use dioxus::prelude::*;


#[server]
pub async fn list_filter_definitions(category_id: String) -> Result<Vec<FilterDefinition>, ServerFnError> {
    let config = backend::store_api_utils::store_api_config::StoreApiConfig::from_env();
    let x = backend::api::filters::list_filter_definitions(&config, category_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_products(request: ProductSearchRequest) -> Result<ProductPage, ServerFnError> {
    let config = backend::store_api_utils::store_api_config::StoreApiConfig::from_env();
    let x = backend::api::products::search_products(&config, request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn create_filter_definitions(payload: CreateFilterDefinitions) -> Result<Vec<FilterDefinition>, ServerFnError> {
    let config = backend::store_api_utils::store_api_config::StoreApiConfig::from_env();
    let x = backend::api::filters::create_filter_definitions(&config, payload).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn update_filter_definition(filter_id: String, payload: NewFilterDefinition) -> Result<FilterDefinition, ServerFnError> {
    let config = backend::store_api_utils::store_api_config::StoreApiConfig::from_env();
    let x = backend::api::filters::update_filter_definition(&config, filter_id, payload).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
