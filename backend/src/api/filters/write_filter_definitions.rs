//! Admin writes of filter definitions.

use common::{filter_admin::{CreateFilterDefinitions, NewFilterDefinition}, filter_definition::FilterDefinition};

use crate::store_api_utils::{store_api_config::StoreApiConfig, store_api_request::store_api_send};

/// Creates every definition of `payload` in one call.
pub async fn create_filter_definitions(config: &StoreApiConfig, payload: CreateFilterDefinitions) -> anyhow::Result<Vec<FilterDefinition>> {
    if payload.filters.is_empty() {
        anyhow::bail!("No filter definitions to create for category {}", payload.category_id);
    }
    tracing::info!("Creating {} filter definitions for category {}", payload.filters.len(), payload.category_id);
    store_api_send(config, reqwest::Method::POST, "filters", &payload).await
}

pub async fn update_filter_definition(config: &StoreApiConfig, filter_id: String, payload: NewFilterDefinition) -> anyhow::Result<FilterDefinition> {
    tracing::info!("Updating filter definition {}", filter_id);
    store_api_send(config, reqwest::Method::PUT, &format!("filters/{filter_id}"), &payload).await
}
