//! Checkout success page: resolves the returned checkout session into a
//! paid or failed outcome via the bounded status poller.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::checkout::{CheckoutPhase, CheckoutPollState};

/// Post-payment landing page.
///
/// Starts the status poller exactly once per view instance, and only when
/// a `session_id` query parameter is present — without one the view stays
/// in the checking state and never issues a request. Teardown cancels any
/// pending retry.
#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let poll = RwSignal::new(CheckoutPollState::default());
    let started = StoredValue::new(false);
    let cancelled = StoredValue::new(false);
    let query = use_query_map();

    Effect::new(move || {
        let Some(session_id) = query.read().get("session_id") else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::checkout::run_poller(
            session_id, poll, cancelled,
        ));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_id, poll, cancelled);
        }
    });

    on_cleanup(move || cancelled.set_value(true));

    let order_details = move || {
        poll.get().snapshot.and_then(|s| s.metadata).map(|meta| {
            let product = meta.product_name.unwrap_or_default();
            let game = meta.game.unwrap_or_default();
            let duration = meta.duration.unwrap_or_default();
            view! {
                <div class="checkout-result__order">
                    <p class="checkout-result__order-label">"Order Details"</p>
                    <p class="checkout-result__order-line">{product} " - " {game}</p>
                    <p class="checkout-result__order-line">"Duration: " {duration}</p>
                </div>
            }
        })
    };

    view! {
        <div class="checkout-result">
            {move || match poll.get().phase {
                CheckoutPhase::Checking => view! {
                    <div class="checkout-result__panel checkout-result__panel--checking">
                        <h2 class="checkout-result__title">"Processing Payment"</h2>
                        <p class="checkout-result__hint">"Verifying your payment..."</p>
                    </div>
                }
                .into_any(),
                CheckoutPhase::Paid => view! {
                    <div class="checkout-result__panel checkout-result__panel--paid">
                        <h2 class="checkout-result__title">"Payment Successful"</h2>
                        <p class="checkout-result__hint">
                            "Your license key has been generated and is ready to use."
                        </p>
                        {order_details}
                        <div class="checkout-result__actions">
                            <a class="btn btn--primary" href="/dashboard">"View License"</a>
                            <a class="btn" href="/products">"Continue Shopping"</a>
                        </div>
                    </div>
                }
                .into_any(),
                CheckoutPhase::Failed => view! {
                    <div class="checkout-result__panel checkout-result__panel--failed">
                        <h2 class="checkout-result__title">"Payment Issue"</h2>
                        <p class="checkout-result__hint">
                            "There was an issue verifying your payment. Please check your \
                             dashboard or contact support."
                        </p>
                        <a class="btn" href="/dashboard">"Go to Dashboard"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
