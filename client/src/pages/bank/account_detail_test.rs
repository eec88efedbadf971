use super::*;

#[test]
fn accepts_a_positive_amount() {
    let request = validate_amount("a@b.com", "250.50").unwrap();
    assert_eq!(request.email, "a@b.com");
    assert!((request.amount - 250.50).abs() < f64::EPSILON);
}

#[test]
fn rejects_missing_email() {
    assert_eq!(validate_amount("", "10").unwrap_err(), "Missing customer email.");
}

#[test]
fn rejects_blank_and_non_numeric_amounts() {
    assert_eq!(validate_amount("a@b.com", "  ").unwrap_err(), "Please enter an amount.");
    assert_eq!(validate_amount("a@b.com", "ten").unwrap_err(), "Please enter a valid amount.");
}

#[test]
fn rejects_zero_negative_and_non_finite_amounts() {
    assert!(validate_amount("a@b.com", "0").is_err());
    assert!(validate_amount("a@b.com", "-5").is_err());
    assert!(validate_amount("a@b.com", "inf").is_err());
    assert!(validate_amount("a@b.com", "NaN").is_err());
}

#[test]
fn rejects_more_than_two_decimal_places() {
    assert_eq!(
        validate_amount("a@b.com", "10.999").unwrap_err(),
        "Amount can have at most two decimal places."
    );
    assert!(validate_amount("a@b.com", "10.99").is_ok());
}
