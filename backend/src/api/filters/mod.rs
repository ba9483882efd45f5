//! Filter catalog endpoints.

mod list_filter_definitions;
pub use list_filter_definitions::list_filter_definitions;

mod write_filter_definitions;
pub use write_filter_definitions::{create_filter_definitions, update_filter_definition};
