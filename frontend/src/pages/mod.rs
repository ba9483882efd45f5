pub mod home_page;
pub mod category_page;
