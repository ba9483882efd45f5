//! Product search endpoint.

mod search_products;
pub use search_products::search_products;
