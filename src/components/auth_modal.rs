//! Login/register modal dialog.
//!
//! Credential errors come back as a rendered message inside the form,
//! using whatever `detail` the backend attached. The external-login
//! button hands off to the identity provider via full-page redirect.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Which form the modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Modal dialog for email/password login and registration.
#[component]
pub fn AuthModal(open: RwSignal<bool>, mode: RwSignal<AuthMode>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let close = move || {
        open.set(false);
        email.set(String::new());
        password.set(String::new());
        name.set(String::new());
        error.set(None);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let result = match mode.get_untracked() {
                    AuthMode::Login => crate::state::auth::login(
                        auth,
                        &email.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await
                    .map(|_| ()),
                    AuthMode::Register => crate::state::auth::register(
                        auth,
                        &email.get_untracked(),
                        &password.get_untracked(),
                        &name.get_untracked(),
                    )
                    .await
                    .map(|_| ()),
                };
                pending.set(false);
                match result {
                    Ok(()) => {
                        open.set(false);
                        email.set(String::new());
                        password.set(String::new());
                        name.set(String::new());
                        error.set(None);
                    }
                    Err(msg) => error.set(Some(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    let toggle_mode = move |_| {
        error.set(None);
        mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            };
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="auth-modal__title">
                        {move || match mode.get() {
                            AuthMode::Login => "Welcome Back",
                            AuthMode::Register => "Join Cheatcore",
                        }}
                    </h2>

                    <form class="auth-modal__form" on:submit=submit>
                        <Show when=move || mode.get() == AuthMode::Register>
                            <input
                                class="auth-modal__input"
                                type="text"
                                placeholder="Username"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </Show>
                        <input
                            class="auth-modal__input"
                            type="email"
                            placeholder="Email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-modal__input"
                            type="password"
                            placeholder="Password"
                            required
                            minlength="6"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />

                        <Show when=move || error.get().is_some()>
                            <p class="auth-modal__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>

                        <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                            {move || {
                                if pending.get() {
                                    "Working..."
                                } else {
                                    match mode.get() {
                                        AuthMode::Login => "Sign In",
                                        AuthMode::Register => "Create Account",
                                    }
                                }
                            }}
                        </button>
                    </form>

                    <div class="auth-modal__divider">"or"</div>

                    <button
                        class="btn btn--external"
                        on:click=move |_| crate::state::auth::start_external_login()
                    >
                        "Continue with Google"
                    </button>

                    <button class="auth-modal__toggle" on:click=toggle_mode>
                        {move || match mode.get() {
                            AuthMode::Login => "Don't have an account? Register",
                            AuthMode::Register => "Already have an account? Sign in",
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
