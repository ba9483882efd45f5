//! Store API calls used by the storefront.

pub mod filters;
pub mod products;
