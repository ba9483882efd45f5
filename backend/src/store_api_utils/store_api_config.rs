//! Store API location and client settings.

use std::time::Duration;

pub const DEFAULT_STORE_API_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_STORE_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl StoreApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_secs: DEFAULT_STORE_API_TIMEOUT_SECS }
    }

    /// Reads `STORE_API_URL` and `STORE_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("STORE_API_URL").unwrap_or(DEFAULT_STORE_API_URL.to_string());
        let timeout_secs = std::env::var("STORE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_STORE_API_TIMEOUT_SECS);
        Self { base_url, timeout_secs }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn client(&self) -> anyhow::Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(client)
    }
}
