//! Reusable card component for product listings.

use leptos::prelude::*;

use crate::net::types::Product;

/// A clickable card linking to the product detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.product_id);
    let status_class = format!("product-card__status product-card__status--{}", product.status);
    let price = crate::state::catalog::display_price(product.price, 1.0);

    view! {
        <a class="product-card" href=href>
            <div class="product-card__header">
                <span class="product-card__game">{product.game}</span>
                <span class=status_class>{product.status_label}</span>
            </div>
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__description">{product.description}</p>
            <div class="product-card__footer">
                <span class="product-card__tier">{product.tier}</span>
                <span class="product-card__price">"$" {price}</span>
            </div>
        </a>
    }
}
