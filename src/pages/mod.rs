//! Page-level views, one per route.

pub mod auth_callback;
pub mod checkout_success;
pub mod dashboard;
pub mod game_products;
pub mod guides;
pub mod home;
pub mod product_detail;
pub mod products;
pub mod status;
