use super::*;

#[test]
fn rejects_bad_email() {
    assert!(validate_register_input("", "secret1", "secret1").is_err());
    assert!(validate_register_input("nope", "secret1", "secret1").is_err());
}

#[test]
fn rejects_short_password() {
    let err = validate_register_input("a@b.com", "abc", "abc").unwrap_err();
    assert_eq!(err, "Password must be at least 6 characters.");
}

#[test]
fn rejects_mismatched_confirmation() {
    let err = validate_register_input("a@b.com", "secret1", "secret2").unwrap_err();
    assert_eq!(err, "Passwords do not match.");
}

#[test]
fn builds_request_with_trimmed_email() {
    let request = validate_register_input(" admin@bank.com ", "secret1", "secret1").unwrap();
    assert_eq!(request.email, "admin@bank.com");
    assert_eq!(request.password, "secret1");
}
