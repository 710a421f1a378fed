//! Account dashboard: license keys, purchase history, and profile.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{License, Transaction};
use crate::state::auth::AuthState;
use crate::util::format::{copy_to_clipboard, display_date, mask_key};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Licenses,
    History,
    Profile,
}

/// Account dashboard. Redirects to `/` once the session bootstrap settles
/// without a user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/", NavigateOptions::default());
        }
    });

    let tab = RwSignal::new(DashboardTab::Licenses);
    let licenses = LocalResource::new(|| crate::net::api::fetch_licenses());
    let transactions = LocalResource::new(|| crate::net::api::fetch_transactions());

    let tab_button = move |target: DashboardTab, label: &'static str| {
        view! {
            <button
                class="dashboard__tab"
                class:dashboard__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <Show
                when=move || !auth.get().loading
                fallback=move || view! { <p class="dashboard__loading">"Loading..."</p> }
            >
                <header class="dashboard__header">
                    <h1>
                        "Welcome back, "
                        {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                    </h1>
                </header>

                <nav class="dashboard__tabs">
                    {tab_button(DashboardTab::Licenses, "My Licenses")}
                    {tab_button(DashboardTab::History, "Purchase History")}
                    {tab_button(DashboardTab::Profile, "Profile")}
                </nav>

                {move || match tab.get() {
                    DashboardTab::Licenses => view! {
                        <LicensesTab licenses=licenses/>
                    }
                    .into_any(),
                    DashboardTab::History => view! {
                        <HistoryTab transactions=transactions/>
                    }
                    .into_any(),
                    DashboardTab::Profile => view! {
                        <ProfileTab licenses=licenses transactions=transactions/>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

/// License list with per-key reveal and copy actions. Keys render masked
/// until explicitly revealed.
#[component]
fn LicensesTab(licenses: LocalResource<Vec<License>>) -> impl IntoView {
    let visible = RwSignal::new(HashSet::<String>::new());

    view! {
        <Suspense fallback=move || view! { <p>"Loading licenses..."</p> }>
            {move || {
                licenses.get().map(|list| {
                    if list.is_empty() {
                        view! {
                            <div class="dashboard__empty">
                                <p>"No licenses yet."</p>
                                <a class="btn btn--primary" href="/products">
                                    "Browse Products"
                                </a>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="dashboard__licenses">
                                {list
                                    .into_iter()
                                    .map(|license| {
                                        view! { <LicenseCard license=license visible=visible/> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn LicenseCard(license: License, visible: RwSignal<HashSet<String>>) -> impl IntoView {
    let id = license.license_id.clone();
    let toggle_id = id.clone();
    let key = license.license_key.clone();
    let masked = mask_key(&license.license_key);
    let copy_key = license.license_key.clone();
    let status_class = format!("license-card__status license-card__status--{}", license.status);
    let expires = display_date(&license.expires_at).to_owned();

    let shown = move || visible.get().contains(&id);
    let shown_label = shown.clone();

    view! {
        <div class="license-card">
            <div class="license-card__header">
                <div>
                    <h3 class="license-card__product">{license.product_name}</h3>
                    <span class="license-card__game">{license.game}</span>
                </div>
                <span class=status_class>{license.status.clone()}</span>
            </div>

            <div class="license-card__key-row">
                <code class="license-card__key">
                    {move || if shown() { key.clone() } else { masked.clone() }}
                </code>
                <button
                    class="license-card__action"
                    on:click=move |_| {
                        visible.update(|set| {
                            if !set.remove(&toggle_id) {
                                set.insert(toggle_id.clone());
                            }
                        });
                    }
                >
                    {move || if shown_label() { "Hide" } else { "Show" }}
                </button>
                <button
                    class="license-card__action"
                    on:click=move |_| copy_to_clipboard(&copy_key)
                >
                    "Copy"
                </button>
            </div>

            <p class="license-card__expiry">"Expires: " {expires}</p>
        </div>
    }
}

#[component]
fn HistoryTab(transactions: LocalResource<Vec<Transaction>>) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
            {move || {
                transactions.get().map(|list| {
                    if list.is_empty() {
                        return view! {
                            <div class="dashboard__empty">
                                <p>"No purchases yet."</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="dashboard__history">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|tx| {
                                        let amount = format!(
                                            "{:.2} {}",
                                            tx.amount,
                                            tx.currency.to_uppercase(),
                                        );
                                        let date = display_date(&tx.created_at).to_owned();
                                        view! {
                                            <tr>
                                                <td>{tx.product_name}</td>
                                                <td>{amount}</td>
                                                <td>{tx.payment_status}</td>
                                                <td>{date}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProfileTab(
    licenses: LocalResource<Vec<License>>,
    transactions: LocalResource<Vec<Transaction>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let active_licenses = move || {
        licenses
            .get()
            .map(|list| list.iter().filter(|l| l.status == "active").count())
            .unwrap_or_default()
    };
    let completed_purchases = move || {
        transactions
            .get()
            .map(|list| list.iter().filter(|t| t.payment_status == "paid").count())
            .unwrap_or_default()
    };

    let on_logout = Callback::new(move |()| {
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

    view! {
        <div class="dashboard__profile">
            {move || {
                auth.get().user.map(|user| {
                    let member_since = display_date(&user.created_at).to_owned();
                    view! {
                        <div class="dashboard__profile-info">
                            <p class="dashboard__profile-name">{user.name}</p>
                            <p class="dashboard__profile-email">{user.email}</p>
                            <p class="dashboard__profile-since">
                                "Member since " {member_since}
                            </p>
                        </div>
                    }
                })
            }}

            <div class="dashboard__profile-stats">
                <div class="stat-card">
                    <span class="stat-card__value">{active_licenses}</span>
                    <span class="stat-card__label">"Active Licenses"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{completed_purchases}</span>
                    <span class="stat-card__label">"Purchases"</span>
                </div>
            </div>

            <button
                class="btn btn--danger"
                on:click=move |_| on_logout.run(())
            >
                "Logout"
            </button>
        </div>
    }
}
