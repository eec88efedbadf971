use super::*;

#[test]
fn accepts_a_complete_form() {
    let request = validate_add_account("arun@mail.example", "AC200", "FN0001", "SAVINGS").unwrap();
    assert_eq!(request.customer_email, "arun@mail.example");
    assert_eq!(request.account_number, "AC200");
    assert_eq!(request.ifsc_code, "FN0001");
    assert_eq!(request.account_type, "SAVINGS");
}

#[test]
fn rejects_missing_email_from_the_route() {
    assert_eq!(validate_add_account("", "AC200", "FN0001", "SAVINGS").unwrap_err(), "Missing customer email.");
}

#[test]
fn rejects_blank_fields() {
    assert!(validate_add_account("a@b.com", " ", "FN0001", "SAVINGS").is_err());
    assert!(validate_add_account("a@b.com", "AC200", "", "SAVINGS").is_err());
    assert!(validate_add_account("a@b.com", "AC200", "FN0001", "").is_err());
}

#[test]
fn trims_all_inputs() {
    let request = validate_add_account(" a@b.com ", " AC200 ", " FN0001 ", " CURRENT ").unwrap();
    assert_eq!(request.customer_email, "a@b.com");
    assert_eq!(request.account_number, "AC200");
    assert_eq!(request.ifsc_code, "FN0001");
    assert_eq!(request.account_type, "CURRENT");
}
