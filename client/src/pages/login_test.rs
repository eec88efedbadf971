use super::*;

#[test]
fn rejects_missing_role() {
    let err = validate_login_input(None, "a@b.com", "pw").unwrap_err();
    assert_eq!(err, "Please select a role.");
}

#[test]
fn rejects_bad_email() {
    assert!(validate_login_input(Some(Role::Admin), "", "pw").is_err());
    assert!(validate_login_input(Some(Role::Admin), "not-an-email", "pw").is_err());
}

#[test]
fn rejects_empty_password() {
    let err = validate_login_input(Some(Role::Customer), "a@b.com", "").unwrap_err();
    assert_eq!(err, "Please enter your password.");
}

#[test]
fn builds_request_with_trimmed_email() {
    let request = validate_login_input(Some(Role::Bank), "  teller@bank.com ", "secret").unwrap();
    assert_eq!(request.email, "teller@bank.com");
    assert_eq!(request.role, Role::Bank);
    assert_eq!(request.password, "secret");
}

#[test]
fn each_role_lands_on_its_own_page() {
    assert_eq!(landing_path(Role::Admin), "/admin/banks");
    assert_eq!(landing_path(Role::Bank), "/bank/customers");
    assert_eq!(landing_path(Role::Customer), "/customer/account");
}
