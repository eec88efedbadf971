use super::*;

#[test]
fn from_status_maps_auth_codes() {
    assert_eq!(ApiError::from_status(401, "expired".to_owned()), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, "no".to_owned()), ApiError::Forbidden);
    assert_eq!(
        ApiError::from_status(500, "boom".to_owned()),
        ApiError::Status { status: 500, body: "boom".to_owned() }
    );
}

#[test]
fn needs_login_only_for_session_errors() {
    assert!(ApiError::NoSession.needs_login());
    assert!(ApiError::Unauthorized.needs_login());
    assert!(!ApiError::Forbidden.needs_login());
    assert!(!ApiError::Network("down".to_owned()).needs_login());
}

#[test]
fn friendly_message_translates_known_backend_texts() {
    let inactive = ApiError::from_status(400, "Receiver account is inactive".to_owned());
    assert_eq!(inactive.friendly_message(), "Cannot use this account - it is inactive.");

    let broke = ApiError::from_status(400, "Insufficient balance".to_owned());
    assert_eq!(broke.friendly_message(), "Insufficient balance in your account.");
}

#[test]
fn friendly_message_passes_other_bodies_verbatim() {
    let other = ApiError::from_status(422, "amount must be positive".to_owned());
    assert_eq!(other.friendly_message(), "amount must be positive");

    let empty = ApiError::from_status(500, "  ".to_owned());
    assert_eq!(empty.friendly_message(), "Server error 500:   ");
}

#[test]
fn friendly_message_falls_back_to_display_for_non_status_errors() {
    assert_eq!(
        ApiError::Unauthorized.friendly_message(),
        "Your session has expired. Please log in again."
    );
}
