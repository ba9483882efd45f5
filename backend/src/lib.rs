//! Server-side access to the store REST API.

pub mod api;
pub mod store_api_utils;
