use super::*;
use crate::net::types::{CheckoutMetadata, CheckoutSnapshot};

fn snapshot(status: &str, payment_status: &str) -> CheckoutSnapshot {
    CheckoutSnapshot {
        status: status.to_owned(),
        payment_status: payment_status.to_owned(),
        amount_total: Some(29.99),
        currency: Some("usd".to_owned()),
        metadata: Some(CheckoutMetadata {
            product_name: Some("Disconnect".to_owned()),
            game: Some("Rust".to_owned()),
            duration: Some("monthly".to_owned()),
        }),
    }
}

fn open() -> Result<CheckoutSnapshot, String> {
    Ok(snapshot("open", "unpaid"))
}

fn paid() -> Result<CheckoutSnapshot, String> {
    Ok(snapshot("complete", "paid"))
}

fn network_error() -> Result<CheckoutSnapshot, String> {
    Err("connection refused".to_owned())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn poll_state_starts_checking_with_no_snapshot() {
    let state = CheckoutPollState::default();
    assert_eq!(state.phase, CheckoutPhase::Checking);
    assert!(state.snapshot.is_none());
    assert_eq!(state.attempts, 0);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn paid_response_is_terminal() {
    let mut state = CheckoutPollState::default();
    assert!(!apply_attempt(&mut state, paid()));
    assert_eq!(state.phase, CheckoutPhase::Paid);
    assert_eq!(state.attempts, 1);
}

#[test]
fn expired_session_is_terminal_failure() {
    let mut state = CheckoutPollState::default();
    assert!(!apply_attempt(&mut state, Ok(snapshot("expired", "unpaid"))));
    assert_eq!(state.phase, CheckoutPhase::Failed);
}

#[test]
fn open_response_schedules_retry() {
    let mut state = CheckoutPollState::default();
    assert!(apply_attempt(&mut state, open()));
    assert_eq!(state.phase, CheckoutPhase::Checking);
    assert_eq!(state.attempts, 1);
}

#[test]
fn four_open_then_paid_resolves_paid() {
    let mut state = CheckoutPollState::default();
    for _ in 0..4 {
        assert!(apply_attempt(&mut state, open()));
    }
    // Fifth and final attempt: paid wins over exhaustion.
    assert!(!apply_attempt(&mut state, paid()));
    assert_eq!(state.phase, CheckoutPhase::Paid);
    assert_eq!(state.attempts, MAX_ATTEMPTS);
}

#[test]
fn five_open_responses_exhaust_the_budget() {
    let mut state = CheckoutPollState::default();
    for _ in 0..4 {
        assert!(apply_attempt(&mut state, open()));
    }
    assert!(!apply_attempt(&mut state, open()));
    assert_eq!(state.phase, CheckoutPhase::Failed);
    assert_eq!(state.attempts, MAX_ATTEMPTS);
}

#[test]
fn five_network_errors_fail_the_flow() {
    let mut state = CheckoutPollState::default();
    for _ in 0..4 {
        assert!(apply_attempt(&mut state, network_error()));
    }
    assert!(!apply_attempt(&mut state, network_error()));
    assert_eq!(state.phase, CheckoutPhase::Failed);
}

#[test]
fn transient_errors_then_paid_still_resolves_paid() {
    let mut state = CheckoutPollState::default();
    assert!(apply_attempt(&mut state, network_error()));
    assert!(apply_attempt(&mut state, network_error()));
    assert!(!apply_attempt(&mut state, paid()));
    assert_eq!(state.phase, CheckoutPhase::Paid);
}

#[test]
fn error_does_not_clobber_last_snapshot() {
    let mut state = CheckoutPollState::default();
    apply_attempt(&mut state, open());
    apply_attempt(&mut state, network_error());
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.status.as_str()),
        Some("open")
    );
}

#[test]
fn snapshot_retained_on_terminal_failure() {
    let mut state = CheckoutPollState::default();
    apply_attempt(&mut state, Ok(snapshot("expired", "unpaid")));
    let meta = state.snapshot.and_then(|s| s.metadata);
    assert_eq!(
        meta.and_then(|m| m.product_name),
        Some("Disconnect".to_owned())
    );
}

#[test]
fn terminal_state_ignores_further_attempts() {
    let mut state = CheckoutPollState::default();
    apply_attempt(&mut state, paid());
    assert!(!apply_attempt(&mut state, open()));
    assert_eq!(state.phase, CheckoutPhase::Paid);
    assert_eq!(state.attempts, 1);
}

#[test]
fn never_more_than_max_attempts() {
    let mut state = CheckoutPollState::default();
    let mut fetches = 0;
    loop {
        fetches += 1;
        if !apply_attempt(&mut state, open()) {
            break;
        }
    }
    assert_eq!(fetches, MAX_ATTEMPTS);
    assert_eq!(state.attempts, MAX_ATTEMPTS);
}
