//! JSON requests against the store API with timing logs.

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

use crate::store_api_utils::store_api_config::StoreApiConfig;

pub async fn store_api_get<T: DeserializeOwned>(
    config: &StoreApiConfig,
    path: &str,
    query: &[(String, String)],
) -> anyhow::Result<T> {
    let url = config.endpoint(path);
    let request = config.client()?.get(&url).query(query);
    send_json(request, &url).await
}

pub async fn store_api_send<B: Serialize, T: DeserializeOwned>(
    config: &StoreApiConfig,
    method: reqwest::Method,
    path: &str,
    body: &B,
) -> anyhow::Result<T> {
    let url = config.endpoint(path);
    let body = serde_json::to_string(body).context("Failed to serialize store api request body")?;
    let request = config
        .client()?
        .request(method, &url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body);
    send_json(request, &url).await
}

async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder, url: &str) -> anyhow::Result<T> {
    let t0 = std::time::Instant::now();
    let response = request.send().await.with_context(|| format!("Store api request failed: {url}"))?;
    let status = response.status();
    let response_txt = response.text().await?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        tracing::error!("STORE API ERROR: {} {} ({}ms)", status, url, dt_ms);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!("STORE API: {} {} ({}ms)", status, url, dt_ms);
    tracing::debug!("STORE API RESPONSE: len = {}", response_txt.len());
    let response = serde_json::from_str::<T>(&response_txt)
        .with_context(|| format!("Invalid json from store api: {url}"))?;
    Ok(response)
}
