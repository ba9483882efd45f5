pub mod store_api;
