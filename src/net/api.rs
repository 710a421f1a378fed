//! REST API helpers for communicating with the backend at `/api`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, forwarding the
//! session cookie on credentialed endpoints. Server-side (SSR): stubs
//! returning `None`/empty/error since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Catalog reads degrade to empty data on any failure so views render
//! without crashing. Mutations return `Result` with the backend-supplied
//! message so the invoking view can display it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, CheckoutRedirect, CheckoutSnapshot, Game, License, Product, ProductStatusRow,
    Review, StoreStats, Transaction, User,
};

/// Pull the backend's `detail` message out of an error response body,
/// falling back to a generic message when the body is not in that shape.
pub fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(|d| d.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

/// GET a JSON payload from an unauthenticated endpoint.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// GET a JSON payload from a session-cookie-credentialed endpoint.
#[cfg(feature = "hydrate")]
async fn get_json_credentialed<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// POST a JSON body to a credentialed endpoint and parse the response,
/// surfacing the backend's `detail` message on a non-2xx status.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
    fallback: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(error_detail(&text, fallback));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

// ---------------------------------------------------------------
// Auth
// ---------------------------------------------------------------

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json_credentialed("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's `detail` message when the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
            "Authentication failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Provision a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's `detail` message, e.g. when the email is taken.
pub async fn register(email: &str, password: &str, name: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/auth/register",
            &serde_json::json!({ "email": email, "password": password, "name": name }),
            "Registration failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the current session via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

/// Exchange an external-IdP one-time token for a session via
/// `POST /api/auth/google/session`.
///
/// # Errors
///
/// Returns an error message when the token is invalid or expired.
pub async fn exchange_google_session(session_id: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/auth/google/session",
            &serde_json::json!({ "session_id": session_id }),
            "Session exchange failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err("not available on server".to_owned())
    }
}

// ---------------------------------------------------------------
// Catalog reads
// ---------------------------------------------------------------

/// Fetch the product catalog, optionally filtered to one game.
pub async fn fetch_products(game: Option<&str>) -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        let url = match game {
            Some(name) => format!(
                "/api/products?game={}",
                String::from(js_sys::encode_uri_component(name))
            ),
            None => "/api/products".to_owned(),
        };
        get_json(&url).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = game;
        Vec::new()
    }
}

/// Fetch a single product by id. Returns `None` when the product does
/// not exist, so the caller can redirect instead of rendering an error.
pub async fn fetch_product(product_id: &str) -> Option<Product> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{product_id}");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        None
    }
}

/// Fetch the per-game catalog summaries from `/api/games`.
pub async fn fetch_games() -> Vec<Game> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/games").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the live detection status board from `/api/product-status`.
pub async fn fetch_product_statuses() -> Vec<ProductStatusRow> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/product-status").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch aggregate storefront counters from `/api/stats`.
pub async fn fetch_stats() -> Option<StoreStats> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch customer reviews from `/api/reviews`.
pub async fn fetch_reviews() -> Vec<Review> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/reviews").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ---------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------

/// Create a checkout session via `POST /api/checkout/create` and return
/// the hosted payment page URL to redirect to.
///
/// # Errors
///
/// Returns the backend's `detail` message when the product or request is
/// rejected.
pub async fn create_checkout(
    product_id: &str,
    origin_url: &str,
    duration: &str,
) -> Result<CheckoutRedirect, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/checkout/create",
            &serde_json::json!({
                "product_id": product_id,
                "origin_url": origin_url,
                "duration": duration,
            }),
            "Checkout failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, origin_url, duration);
        Err("not available on server".to_owned())
    }
}

/// Fetch one settlement-status snapshot for a checkout session.
///
/// # Errors
///
/// Returns an error string on network failure or a non-2xx status; the
/// poller treats this as "not yet paid" until its budget runs out.
pub async fn fetch_checkout_status(session_id: &str) -> Result<CheckoutSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/checkout/status/{session_id}");
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("status request failed: {}", resp.status()));
        }
        resp.json::<CheckoutSnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err("not available on server".to_owned())
    }
}

// ---------------------------------------------------------------
// User dashboard
// ---------------------------------------------------------------

/// Fetch the current user's license keys from `/api/licenses`.
pub async fn fetch_licenses() -> Vec<License> {
    #[cfg(feature = "hydrate")]
    {
        get_json_credentialed("/api/licenses").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the current user's purchase history from `/api/transactions`.
pub async fn fetch_transactions() -> Vec<Transaction> {
    #[cfg(feature = "hydrate")]
    {
        get_json_credentialed("/api/transactions")
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
