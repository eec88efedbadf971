use super::*;
use models::{LoginResponse, Role};

fn session_with_token(token: &str) -> Session {
    Session::from_login(LoginResponse {
        token: token.to_owned(),
        role: Role::Bank,
        email: "teller@bank.com".to_owned(),
        account_number: None,
        bank_id: Some(3),
    })
}

#[test]
fn encode_query_keeps_unreserved_and_escapes_the_rest() {
    assert_eq!(encode_query("AC-100_x.y~z"), "AC-100_x.y~z");
    assert_eq!(encode_query("a b@c.com"), "a%20b%40c.com");
    assert_eq!(encode_query("50%+"), "50%25%2B");
}

#[test]
fn transactions_path_with_and_without_account() {
    assert_eq!(transactions_path(None), "/api/customer/transactions");
    assert_eq!(transactions_path(Some("  ")), "/api/customer/transactions");
    assert_eq!(transactions_path(Some(" AC7 ")), "/api/customer/transactions?accountNumber=AC7");
}

#[test]
fn lock_path_picks_action_by_direction() {
    assert_eq!(lock_path("AC9", true), "/api/admin/lock/AC9");
    assert_eq!(lock_path("AC9", false), "/api/admin/unlock/AC9");
}

#[test]
fn email_query_path_escapes_the_address() {
    assert_eq!(
        email_query_path("/api/bank/account/exists", "jo+x@bank.com"),
        "/api/bank/account/exists?email=jo%2Bx%40bank.com"
    );
}

#[test]
fn bank_transactions_path_carries_the_id() {
    assert_eq!(bank_transactions_path(42), "/api/bank/transactions?bankId=42");
}

#[test]
fn bearer_rejects_blank_tokens_before_any_request() {
    assert_eq!(bearer(&session_with_token("abc")).ok(), Some("abc".to_owned()));
    assert!(matches!(bearer(&session_with_token("")), Err(ApiError::NoSession)));
    assert!(matches!(bearer(&session_with_token("   ")), Err(ApiError::NoSession)));
}

#[test]
fn account_path_escapes_the_number() {
    assert_eq!(account_path("AC/1"), "/api/customer/account/AC%2F1");
}
