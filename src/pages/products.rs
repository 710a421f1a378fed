//! Products overview: one card per game with aggregate counts.

use leptos::prelude::*;

use crate::state::catalog;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products(None));
    let games = LocalResource::new(|| crate::net::api::fetch_games());

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Our Products"</h1>
                <p>"Select your game to browse available enhancements."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading catalog..."</p> }>
                {move || {
                    products.get().map(|list| {
                        let groups = catalog::group_by_game(
                            &list,
                            &games.get().unwrap_or_default(),
                        );
                        let undetected =
                            list.iter().filter(|p| p.status == "undetected").count();
                        view! {
                            <div class="products-page__stats">
                                <span>{list.len()} " products"</span>
                                <span>{groups.len()} " games"</span>
                                <span>{undetected} " undetected"</span>
                            </div>
                            <div class="products-page__grid">
                                {groups
                                    .into_iter()
                                    .map(|g| {
                                        let href = format!("/products/{}", g.slug);
                                        let from =
                                            catalog::display_price(g.lowest_price, 1.0);
                                        view! {
                                            <a class="game-card" href=href>
                                                <h3 class="game-card__name">{g.name}</h3>
                                                <p class="game-card__counts">
                                                    {g.product_count} " products, "
                                                    {g.undetected_count} " undetected"
                                                </p>
                                                <span class="game-card__price">
                                                    "From $" {from}
                                                </span>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
