use dioxus::prelude::*;

use crate::components::store_header::StoreHeader;
use crate::pages::home_page::HomePage;
use crate::pages::category_page::CategoryPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreHeader)]


    #[route("/")]
    HomePage {},


    #[route("/category/:category_id")]
    CategoryPage { category_id: String },

}
