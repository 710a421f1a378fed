use super::*;
use crate::net::types::User;

fn user(id: &str) -> User {
    User {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        picture: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Transition appliers
// =============================================================

#[test]
fn bootstrap_success_sets_user_and_clears_loading() {
    let mut state = AuthState::default();
    apply_bootstrap(&mut state, Some(user("u-1")));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-1"));
    assert!(!state.loading);
}

#[test]
fn bootstrap_failure_clears_loading_without_user() {
    let mut state = AuthState::default();
    apply_bootstrap(&mut state, None);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn current_user_reflects_most_recent_login() {
    let mut state = AuthState::default();
    apply_user(&mut state, user("u-1"));
    apply_user(&mut state, user("u-2"));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-2"));
}

#[test]
fn logout_clears_user() {
    let mut state = AuthState::default();
    apply_user(&mut state, user("u-1"));
    apply_logout(&mut state);
    assert!(state.user.is_none());
}

#[test]
fn login_after_logout_sets_user_again() {
    let mut state = AuthState::default();
    apply_user(&mut state, user("u-1"));
    apply_logout(&mut state);
    apply_user(&mut state, user("u-3"));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-3"));
}

#[test]
fn failed_bootstrap_after_login_clears_user() {
    let mut state = AuthState::default();
    apply_user(&mut state, user("u-1"));
    apply_bootstrap(&mut state, None);
    assert!(state.user.is_none());
}
