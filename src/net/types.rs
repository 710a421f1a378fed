//! Wire types for the `/api` REST endpoints.
//!
//! Field names follow the backend response models exactly. Fields the
//! backend sometimes omits carry `#[serde(default)]` so a partial payload
//! degrades to empty data instead of a deserialization failure.

use serde::{Deserialize, Serialize};

/// The authenticated principal for the active session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Response to login, register, and external-session exchange.
///
/// The cookie carries the session; `token` is returned for callers that
/// cannot use cookies and is otherwise ignored by this client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}

/// A purchasable product scoped to one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub game: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: f64,
    pub status: String,
    #[serde(default)]
    pub status_label: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub accent_color: String,
    #[serde(default)]
    pub tier: String,
}

/// Per-game summary returned by `/games`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    #[serde(default)]
    pub products: Vec<GameProductSummary>,
}

/// Abbreviated product entry nested inside [`Game`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameProductSummary {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub tier: String,
    pub price: f64,
    pub status: String,
}

/// One row of the live detection status board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStatusRow {
    pub product_id: String,
    pub name: String,
    pub game: String,
    pub status: String,
    #[serde(default)]
    pub last_updated: String,
}

/// Aggregate storefront counters for the marketing pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_products: u32,
    pub total_games: u32,
    pub undetected_count: u32,
    #[serde(default)]
    pub total_reviews: u32,
}

/// A customer review shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub user_name: String,
    pub product_name: String,
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// A time-bounded license key owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub license_id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub game: String,
    pub license_key: String,
    pub status: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub purchased_at: String,
    #[serde(default)]
    pub expires_at: String,
}

/// One purchase attempt in the user's transaction history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default)]
    pub product_id: String,
    pub product_name: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Response to `/checkout/create`: the hosted payment page to redirect to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRedirect {
    pub url: String,
    #[serde(default)]
    pub session_id: String,
}

/// One settlement-status snapshot from `/checkout/status/:session_id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    /// Session status from the payment processor, e.g. `open` or `expired`.
    #[serde(default)]
    pub status: String,
    /// Payment status, e.g. `unpaid`, `pending`, or `paid`.
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub amount_total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: Option<CheckoutMetadata>,
}

/// Order metadata attached to a checkout session at creation time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutMetadata {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}
