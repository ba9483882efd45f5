//! Catalog query: filter definitions of one category.

use common::filter_definition::FilterDefinition;

use crate::store_api_utils::{store_api_config::StoreApiConfig, store_api_request::store_api_get};

pub async fn list_filter_definitions(config: &StoreApiConfig, category_id: String) -> anyhow::Result<Vec<FilterDefinition>> {
    let query = vec![("categoryId".to_string(), category_id.clone())];
    let definitions = store_api_get::<Vec<FilterDefinition>>(config, "filters", &query).await?;

    // the catalog is authoritative per category; anything else is dropped
    let total = definitions.len();
    let definitions = definitions.into_iter().filter(|d| d.category_id == category_id).collect::<Vec<_>>();
    if definitions.len() != total {
        tracing::warn!("list_filter_definitions: dropped {} definitions not in category {}", total - definitions.len(), category_id);
    }
    Ok(definitions)
}
