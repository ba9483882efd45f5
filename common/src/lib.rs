//! Faceted product filter engine shared between frontend and backend.

extern crate serde;


pub mod filter_definition;
pub mod filter_state;
pub mod dropdown_selection;
pub mod range_stage;
pub mod query_builder;
pub mod facet_widget;
pub mod filter_admin;
pub mod product_search;
pub mod search_const;
