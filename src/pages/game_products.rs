//! Per-game product listing, reached via `/products/:slug`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::product_card::ProductCard;
use crate::state::catalog;

/// Products for one game. If the slug matches no game (the backend
/// returns nothing for it), fall back to treating it as a product id and
/// let the detail page resolve or reject it.
#[component]
pub fn GameProductsPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let products = LocalResource::new(move || {
        let game = catalog::game_from_slug(&slug());
        async move { crate::net::api::fetch_products(Some(&game)).await }
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(list) = products.get() {
            if list.is_empty() {
                navigate(&format!("/product/{}", slug()), NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="game-products-page">
            <header class="game-products-page__header">
                <h1>{move || catalog::game_from_slug(&slug())} " Products"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products.get().map(|list| {
                        view! {
                            <div class="game-products-page__grid">
                                {list
                                    .into_iter()
                                    .map(|p| view! { <ProductCard product=p/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
