use super::*;
use models::{LoginResponse, Role, Session};

fn customer_session() -> Session {
    Session::from_login(LoginResponse {
        token: "t1".to_owned(),
        role: Role::Customer,
        email: "a@b.com".to_owned(),
        account_number: Some("AC100".to_owned()),
        bank_id: None,
    })
}

#[test]
fn default_state_is_loading_with_no_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.ready().is_none());
    assert!(!state.missing());
}

#[test]
fn ready_is_gated_on_restoration_finishing() {
    let state = SessionState { session: Some(customer_session()), loading: true };
    assert!(state.ready().is_none());

    let state = SessionState { session: Some(customer_session()), loading: false };
    assert_eq!(state.ready().map(|s| s.token.as_str()), Some("t1"));
}

#[test]
fn missing_only_after_restoration() {
    let state = SessionState { session: None, loading: false };
    assert!(state.missing());
}

#[test]
fn with_role_filters_by_role() {
    let state = SessionState { session: Some(customer_session()), loading: false };
    assert!(state.with_role(Role::Customer).is_some());
    assert!(state.with_role(Role::Admin).is_none());
}

#[test]
fn load_off_browser_returns_none() {
    // Off-WASM the storage boundary must be a deterministic no-op so pages
    // enter their error state instead of fetching (session-gate property).
    assert!(load().is_none());
}
