//! Top navigation bar with auth entry points and the account menu.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_modal::{AuthMode, AuthModal};
use crate::state::auth::AuthState;

/// Fixed navigation bar: brand, catalog links, and either login/register
/// buttons or the signed-in account menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_auth = RwSignal::new(false);
    let auth_mode = RwSignal::new(AuthMode::Login);
    let show_account = RwSignal::new(false);
    let navigate = use_navigate();

    let open_login = move |_| {
        auth_mode.set(AuthMode::Login);
        show_auth.set(true);
    };
    let open_register = move |_| {
        auth_mode.set(AuthMode::Register);
        show_auth.set(true);
    };

    let on_logout = Callback::new(move |()| {
        show_account.set(false);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(auth).await;
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth);
        }
    });

    let first_name = move || {
        auth.get()
            .user
            .map(|u| u.name.split_whitespace().next().unwrap_or_default().to_owned())
            .unwrap_or_default()
    };

    view! {
        <header class="navbar">
            <nav class="navbar__links">
                <a class="navbar__link" href="/status">"Status"</a>
                <a class="navbar__link" href="/products">"Products"</a>
                <a class="navbar__link" href="/guides">"Guides"</a>
            </nav>

            <a class="navbar__brand" href="/">
                <span class="navbar__brand-main">"Cheat"</span>
                <span class="navbar__brand-accent">"core"</span>
            </a>

            <div class="navbar__account">
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=move || {
                        view! {
                            <button class="navbar__login" on:click=open_login>
                                "Login"
                            </button>
                            <button class="btn btn--primary" on:click=open_register>
                                "Register"
                            </button>
                        }
                    }
                >
                    <button
                        class="navbar__user"
                        on:click=move |_| show_account.update(|v| *v = !*v)
                    >
                        {first_name}
                    </button>
                    <Show when=move || show_account.get()>
                        <div class="navbar__menu">
                            <a class="navbar__menu-item" href="/dashboard">"Dashboard"</a>
                            <button class="navbar__menu-item navbar__menu-item--danger" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </header>

        <AuthModal open=show_auth mode=auth_mode/>
    }
}
