pub mod product_results_view;
pub mod product_card;
pub mod pagination_controls;
