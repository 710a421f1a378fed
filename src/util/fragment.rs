//! URL-fragment handling for the external-login callback.
//!
//! The identity provider returns a one-time token in the URL fragment
//! (`#session_id=...`), not the query string, so it never reaches the
//! server. The shell checks for it synchronously before normal routing
//! proceeds.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Extract the one-time session token from a URL fragment.
///
/// Matches `session_id=<value>` anywhere in the fragment; the value ends
/// at the next `&`. Returns `None` for a missing or empty value.
pub fn session_id_from_fragment(fragment: &str) -> Option<&str> {
    let marker = "session_id=";
    let start = fragment.find(marker)? + marker.len();
    let rest = &fragment[start..];
    let end = rest.find('&').unwrap_or(rest.len());
    let value = &rest[..end];
    if value.is_empty() { None } else { Some(value) }
}

/// The current `window.location` fragment, empty on the server.
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether the current location fragment carries a session token.
/// Checked synchronously before the router mounts.
pub fn fragment_has_session_token() -> bool {
    current_fragment().contains("session_id=")
}

/// Full-page navigation, bypassing the client-side router. Used for the
/// callback redirects and the hosted payment page handoff.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
