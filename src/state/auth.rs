//! Session/auth state holder: the single source of truth for "who is
//! logged in", provided via context to the whole component tree.
//!
//! The session itself is an httpOnly cookie the client never inspects;
//! this module only tracks the resolved [`User`] and re-validates the
//! cookie on every full load via [`bootstrap`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{AuthResponse, User};

/// Authentication state tracking the current user and loading status.
///
/// At most one user is live at a time; `None` means anonymous. `loading`
/// starts `true` and clears once the initial bootstrap check resolves, so
/// gated views can render a placeholder instead of redirecting early.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Replace the current user after a successful login, register, or
/// external-session exchange.
pub fn apply_user(state: &mut AuthState, user: User) {
    state.user = Some(user);
    state.loading = false;
}

/// Fold the bootstrap result into the state. Absence of a user is the
/// normal anonymous state, never surfaced as an error.
pub fn apply_bootstrap(state: &mut AuthState, user: Option<User>) {
    state.user = user;
    state.loading = false;
}

/// Clear the current user. Runs even when the logout request failed,
/// since the server-side session is expiring either way.
pub fn apply_logout(state: &mut AuthState) {
    state.user = None;
}

/// Resolve the ambient session cookie to a user, once per process start.
///
/// Always resolves: any failure, including plain 401, leaves the state
/// anonymous with the loading flag cleared.
pub async fn bootstrap(auth: RwSignal<AuthState>) {
    let user = crate::net::api::fetch_current_user().await;
    auth.update(|s| apply_bootstrap(s, user));
}

/// Sign in and set the current user from the response.
///
/// # Errors
///
/// Propagates the backend's message for the invoking view to display.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, String> {
    let resp = crate::net::api::login(email, password).await?;
    auth.update(|s| apply_user(s, resp.user.clone()));
    Ok(resp)
}

/// Provision a new account and sign in as it.
///
/// # Errors
///
/// Propagates the backend's message for the invoking view to display.
pub async fn register(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthResponse, String> {
    let resp = crate::net::api::register(email, password, name).await?;
    auth.update(|s| apply_user(s, resp.user.clone()));
    Ok(resp)
}

/// Invalidate the session server-side, then clear the current user
/// unconditionally.
pub async fn logout(auth: RwSignal<AuthState>) {
    crate::net::api::logout().await;
    auth.update(apply_logout);
}

/// Redirect to the external identity provider.
///
/// The return target is always `origin + "/dashboard"` and nothing else.
/// The provider validates it against an exact allow-list; any fallback or
/// alternate URL breaks the flow.
pub fn start_external_login() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(origin) = window.location().origin() else {
            return;
        };
        let redirect = format!("{origin}/dashboard");
        let url = format!(
            "https://auth.emergentagent.com/?redirect={}",
            String::from(js_sys::encode_uri_component(&redirect))
        );
        let _ = window.location().set_href(&url);
    }
}

/// Exchange a one-time token from the IdP callback fragment for a session.
///
/// Returns `true` when the caller should navigate to the dashboard and
/// `false` when it should fall back to the public landing page. Must be
/// invoked at most once per token; the callback view's one-shot latch
/// enforces that.
pub async fn exchange_external_session(auth: RwSignal<AuthState>, session_id: &str) -> bool {
    match crate::net::api::exchange_google_session(session_id).await {
        Ok(resp) => {
            auth.update(|s| apply_user(s, resp.user));
            true
        }
        Err(e) => {
            leptos::logging::warn!("session exchange failed: {e}");
            false
        }
    }
}
