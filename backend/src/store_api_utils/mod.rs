//! Helpers for talking to the external store REST API.

pub mod store_api_config;
pub mod store_api_request;
