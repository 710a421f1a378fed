//! Shared presentational components.

pub mod auth_modal;
pub mod navbar;
pub mod product_card;
