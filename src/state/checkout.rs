//! Checkout confirmation poller.
//!
//! After the hosted payment page redirects back to `/checkout/success`,
//! the payment has settled externally but the webhook may not have landed
//! yet. This module resolves that into one of two terminal outcomes by
//! polling the status endpoint on a fixed schedule with a bounded budget.
//!
//! The transition logic lives in the pure [`apply_attempt`] so it can be
//! unit-tested natively; [`run_poller`] is the browser-side driver.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::types::CheckoutSnapshot;

/// Maximum status fetches per poller instance.
pub const MAX_ATTEMPTS: u32 = 5;

/// Fixed delay between attempts, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 2000;

/// Phase of one checkout confirmation. `Paid` and `Failed` are terminal:
/// once reached, no further polling occurs for that view instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Checking,
    Paid,
    Failed,
}

/// Poll state scoped to the lifetime of one checkout-success view.
///
/// The most recent snapshot is retained regardless of which transition it
/// triggers, so the terminal views can show order metadata if available.
#[derive(Clone, Debug, Default)]
pub struct CheckoutPollState {
    pub phase: CheckoutPhase,
    pub snapshot: Option<CheckoutSnapshot>,
    pub attempts: u32,
}

/// Fold one status fetch into the poll state. Returns `true` when another
/// attempt should be scheduled.
///
/// A `paid` response wins even on the final attempt: the paid check runs
/// before the exhaustion check on the same response. Fetch errors count as
/// "not yet paid" and are retried until the budget runs out, at which
/// point the flow fails.
pub fn apply_attempt(
    state: &mut CheckoutPollState,
    outcome: Result<CheckoutSnapshot, String>,
) -> bool {
    if state.phase != CheckoutPhase::Checking {
        return false;
    }
    state.attempts += 1;

    match outcome {
        Ok(snapshot) => {
            let paid = snapshot.payment_status == "paid";
            let expired = snapshot.status == "expired";
            state.snapshot = Some(snapshot);

            if paid {
                state.phase = CheckoutPhase::Paid;
                false
            } else if expired {
                state.phase = CheckoutPhase::Failed;
                false
            } else if state.attempts >= MAX_ATTEMPTS {
                state.phase = CheckoutPhase::Failed;
                false
            } else {
                true
            }
        }
        Err(_) => {
            if state.attempts >= MAX_ATTEMPTS {
                state.phase = CheckoutPhase::Failed;
                false
            } else {
                true
            }
        }
    }
}

/// Drive the poll loop for one checkout session.
///
/// Attempts are strictly sequential: the next fetch is only issued after
/// the previous result has been folded in and a retry delay has elapsed.
/// The `cancelled` flag is tripped by the view's `on_cleanup`, and all
/// signal writes go through `try_update`, so no state mutation can happen
/// after the view is torn down.
#[cfg(feature = "hydrate")]
pub async fn run_poller(
    session_id: String,
    state: leptos::prelude::RwSignal<CheckoutPollState>,
    cancelled: leptos::prelude::StoredValue<bool>,
) {
    use leptos::prelude::{GetValue, Update};

    loop {
        let outcome = crate::net::api::fetch_checkout_status(&session_id).await;
        if cancelled.try_get_value().unwrap_or(true) {
            return;
        }
        let Some(again) = state.try_update(|s| apply_attempt(s, outcome)) else {
            return;
        };
        if !again {
            return;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
        if cancelled.try_get_value().unwrap_or(true) {
            return;
        }
    }
}
