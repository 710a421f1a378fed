//! External-login callback view.
//!
//! Rendered instead of the router whenever the URL fragment carries a
//! `session_id=` token. Consumes the token exactly once, exchanges it for
//! a session, and leaves via full-page redirect.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::fragment;

/// Exchanges the fragment token for a session, then redirects:
/// `/dashboard` on success, `/` on failure or a missing token. The
/// one-shot latch guarantees at most one exchange per token, even if the
/// view renders twice.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let processed = StoredValue::new(false);

    Effect::new(move || {
        if processed.get_value() {
            return;
        }
        processed.set_value(true);

        let hash = fragment::current_fragment();
        let Some(session_id) = fragment::session_id_from_fragment(&hash).map(ToOwned::to_owned)
        else {
            fragment::redirect_to("/");
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ok = crate::state::auth::exchange_external_session(auth, &session_id).await;
            fragment::redirect_to(if ok { "/dashboard" } else { "/" });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_id, auth);
        }
    });

    view! {
        <div class="auth-callback">
            <p class="auth-callback__hint">"Signing you in..."</p>
        </div>
    }
}
