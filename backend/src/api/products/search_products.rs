//! Product search with serialized filter params.

use common::product_search::{ProductPage, ProductSearchRequest};

use crate::store_api_utils::{store_api_config::StoreApiConfig, store_api_request::store_api_get};

pub async fn search_products(config: &StoreApiConfig, request: ProductSearchRequest) -> anyhow::Result<ProductPage> {
    let query = request.query_pairs();
    tracing::debug!("search_products: {} params, page {}", request.params.len(), request.page);
    let page = store_api_get::<ProductPage>(config, "products/search", &query).await?;
    Ok(page)
}
