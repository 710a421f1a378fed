//! Product detail page with duration selection and checkout handoff.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::AuthState;
use crate::state::catalog::{self, DURATIONS};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = LocalResource::new(move || {
        let id = product_id();
        async move { crate::net::api::fetch_product(&id).await }
    });

    // Unknown id: back to the catalog rather than a dead page.
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(None) = product.get() {
            navigate("/products", NavigateOptions::default());
        }
    });

    let duration = RwSignal::new("monthly".to_owned());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let purchase = Callback::new(move |()| {
        if auth.get_untracked().user.is_none() {
            error.set(Some("Please login to purchase".to_owned()));
            return;
        }
        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let id = product_id();
            let duration = duration.get_untracked();
            leptos::task::spawn_local(async move {
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                let origin_url = format!("{origin}/checkout/success");
                match crate::net::api::create_checkout(&id, &origin_url, &duration).await {
                    Ok(redirect) => crate::util::fragment::redirect_to(&redirect.url),
                    Err(msg) => {
                        error.set(Some(msg));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            pending.set(false);
        }
    });

    view! {
        <div class="product-detail">
            <Suspense fallback=move || view! { <p>"Loading product..."</p> }>
                {move || {
                    product.get().flatten().map(|p| {
                        let status_class = format!(
                            "product-detail__status product-detail__status--{}",
                            p.status,
                        );
                        let detected = p.status == "detected";
                        let base_price = p.price;
                        let price = move || {
                            let key = duration.get();
                            let multiplier = DURATIONS
                                .iter()
                                .find(|d| d.key == key)
                                .map_or(1.0, |d| d.multiplier);
                            catalog::display_price(base_price, multiplier)
                        };
                        view! {
                            <div class="product-detail__info">
                                <span class="product-detail__game">{p.game}</span>
                                <h1 class="product-detail__name">{p.name}</h1>
                                <span class=status_class>{p.status_label}</span>
                                <p class="product-detail__description">{p.description}</p>
                                <ul class="product-detail__features">
                                    {p.features
                                        .into_iter()
                                        .map(|f| view! { <li>{f}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>

                            <div class="product-detail__purchase">
                                <div class="product-detail__durations">
                                    {DURATIONS
                                        .iter()
                                        .map(|d| {
                                            let key = d.key;
                                            let option_price =
                                                catalog::display_price(base_price, d.multiplier);
                                            view! {
                                                <button
                                                    class="product-detail__duration"
                                                    class:product-detail__duration--active=move || {
                                                        duration.get() == key
                                                    }
                                                    on:click=move |_| duration.set(key.to_owned())
                                                >
                                                    <span>{d.label}</span>
                                                    <span>"$" {option_price}</span>
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>

                                <p class="product-detail__price">"$" {price}</p>

                                {move || {
                                    error.get().map(|msg| {
                                        view! { <p class="product-detail__error">{msg}</p> }
                                    })
                                }}

                                <button
                                    class="btn btn--primary product-detail__buy"
                                    disabled=move || pending.get() || detected
                                    on:click=move |_| purchase.run(())
                                >
                                    {move || {
                                        if detected {
                                            "Currently Unavailable"
                                        } else if pending.get() {
                                            "Redirecting..."
                                        } else {
                                            "Purchase Now"
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
