pub mod facet_list;
pub mod dropdown_facet;
pub mod range_facet;
pub mod filter_sidebar;
pub mod filter_slider;
