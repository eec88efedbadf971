use super::*;

fn valid() -> Result<TransferRequest, String> {
    validate_transfer("AC100", "AC200", "FN0001", "50.00", "rent")
}

#[test]
fn accepts_a_complete_form() {
    let request = valid().unwrap();
    assert_eq!(request.sender_account_number, "AC100");
    assert_eq!(request.receiver_account_number, "AC200");
    assert!((request.amount - 50.0).abs() < f64::EPSILON);
    assert_eq!(request.purpose, "rent");
}

#[test]
fn rejects_a_session_with_no_account() {
    let err = validate_transfer("", "AC200", "FN0001", "50", "rent").unwrap_err();
    assert_eq!(err, "No account is linked to this session. Please log in again.");
}

#[test]
fn rejects_transfers_to_the_same_account() {
    let err = validate_transfer("AC100", " AC100 ", "FN0001", "50", "rent").unwrap_err();
    assert_eq!(err, "Cannot transfer to your own account.");
}

#[test]
fn rejects_blank_receiver_ifsc_and_purpose() {
    assert!(validate_transfer("AC100", "", "FN0001", "50", "rent").is_err());
    assert!(validate_transfer("AC100", "AC200", " ", "50", "rent").is_err());
    assert!(validate_transfer("AC100", "AC200", "FN0001", "50", "").is_err());
}

#[test]
fn settled_success_confirms_and_clears_the_form() {
    let outcome = settle_transfer(Ok("  Transfer of 50.00 to AC200 completed.  ".to_owned()));
    assert_eq!(outcome.confirmation.as_deref(), Some("Transfer of 50.00 to AC200 completed."));
    assert_eq!(outcome.error, None);
    assert!(outcome.clear_form);

    let blank = settle_transfer(Ok(String::new()));
    assert_eq!(blank.confirmation.as_deref(), Some("Transfer completed."));
}

#[test]
fn settled_failure_keeps_the_form_and_reports_the_error() {
    let outcome = settle_transfer(Err(ApiError::Status { status: 400, body: "Insufficient balance".to_owned() }));
    assert_eq!(outcome.confirmation, None);
    assert_eq!(outcome.error.as_deref(), Some("Insufficient balance in your account."));
    assert!(!outcome.clear_form);
}

#[test]
fn rejects_bad_amounts() {
    assert!(validate_transfer("AC100", "AC200", "FN0001", "", "rent").is_err());
    assert!(validate_transfer("AC100", "AC200", "FN0001", "zero", "rent").is_err());
    assert!(validate_transfer("AC100", "AC200", "FN0001", "0", "rent").is_err());
    assert!(validate_transfer("AC100", "AC200", "FN0001", "-1", "rent").is_err());
}
