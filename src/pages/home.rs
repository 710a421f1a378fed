//! Landing page: hero, store stats, featured products, and reviews.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog;

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_stats());
    let products = LocalResource::new(|| crate::net::api::fetch_products(None));
    let reviews = LocalResource::new(|| crate::net::api::fetch_reviews());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">
                    "Dominate Every " <span class="hero__title-accent">"Game"</span>
                </h1>
                <p class="hero__subtitle">
                    "Premium, undetected enhancements with instant delivery and \
                     around-the-clock support."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/products">"Browse Products"</a>
                    <a class="btn" href="/status">"Check Status"</a>
                </div>
            </section>

            <section class="home-page__stats">
                {move || {
                    stats.get().flatten().map(|s| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{s.total_products}</span>
                                <span class="stat-card__label">"Products"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__value">{s.total_games}</span>
                                <span class="stat-card__label">"Games"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__value">{s.undetected_count}</span>
                                <span class="stat-card__label">"Undetected"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__value">{s.total_reviews}</span>
                                <span class="stat-card__label">"Reviews"</span>
                            </div>
                        }
                    })
                }}
            </section>

            <section class="home-page__featured">
                <h2>"Featured Products"</h2>
                <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                    {move || {
                        products.get().map(|list| {
                            view! {
                                <div class="home-page__featured-grid">
                                    {catalog::featured(&list)
                                        .into_iter()
                                        .map(|p| view! { <ProductCard product=p/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="home-page__reviews">
                <h2>"What Players Say"</h2>
                {move || {
                    reviews.get().map(|list| {
                        list.into_iter()
                            .map(|r| {
                                let stars = "\u{2605}".repeat(usize::from(r.rating.min(5)));
                                view! {
                                    <div class="review-card">
                                        <span class="review-card__stars">{stars}</span>
                                        <p class="review-card__text">{r.text}</p>
                                        <p class="review-card__meta">
                                            {r.user_name} " on " {r.product_name}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </section>
        </div>
    }
}
