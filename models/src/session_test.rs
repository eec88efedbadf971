use super::*;

#[test]
fn role_round_trips_through_backend_strings() {
    for role in [Role::Admin, Role::Bank, Role::Customer] {
        assert_eq!(Role::from_str(role.as_str()), Some(role));
    }
    assert_eq!(Role::from_str(" customer "), Some(Role::Customer));
    assert_eq!(Role::from_str("TELLER"), None);
}

#[test]
fn login_response_deserializes_role_specific_fields() {
    let customer: LoginResponse = serde_json::from_str(
        r#"{"token":"t1","role":"CUSTOMER","email":"a@b.com","accountNumber":"AC100"}"#,
    )
    .unwrap();
    assert_eq!(customer.role, Role::Customer);
    assert_eq!(customer.account_number.as_deref(), Some("AC100"));
    assert_eq!(customer.bank_id, None);

    let manager: LoginResponse =
        serde_json::from_str(r#"{"token":"t2","role":"BANK","email":"m@b.com","bankId":7}"#).unwrap();
    assert_eq!(manager.role, Role::Bank);
    assert_eq!(manager.bank_id, Some(7));
}

#[test]
fn session_from_login_carries_identifiers() {
    let session = Session::from_login(LoginResponse {
        token: "t1".to_owned(),
        role: Role::Customer,
        email: "a@b.com".to_owned(),
        account_number: Some("AC100".to_owned()),
        bank_id: None,
    });
    assert_eq!(session.bearer(), Some("t1"));
    assert_eq!(session.account_number.as_deref(), Some("AC100"));
    assert_eq!(session.customer_name, None);
}

#[test]
fn bearer_rejects_empty_and_whitespace_tokens() {
    let mut session = Session::from_login(LoginResponse {
        token: String::new(),
        role: Role::Admin,
        email: "root@b.com".to_owned(),
        account_number: None,
        bank_id: None,
    });
    assert_eq!(session.bearer(), None);
    session.token = "   ".to_owned();
    assert_eq!(session.bearer(), None);
    session.token = " t9 ".to_owned();
    assert_eq!(session.bearer(), Some("t9"));
}
