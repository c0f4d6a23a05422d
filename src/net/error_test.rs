use super::*;

#[test]
fn session_status_401_is_unauthorized() {
    let err = ApiError::from_session_status(401, r#"{"error": "Authentication required"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn session_status_uses_server_message_verbatim() {
    let err = ApiError::from_session_status(400, r#"{"error": "Task already assigned"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "Task already assigned".to_owned() });
    assert_eq!(err.user_message(), "Task already assigned");
}

#[test]
fn session_status_403_is_a_displayable_error() {
    let err = ApiError::from_session_status(403, r#"{"error": "Insufficient permissions"}"#);
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message(), "Insufficient permissions");
}

#[test]
fn unparseable_body_uses_fallback() {
    let err = ApiError::from_session_status(500, "<html>Internal Server Error</html>");
    assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);
}

#[test]
fn empty_error_field_uses_fallback() {
    let err = ApiError::from_status(400, r#"{"error": "  "}"#, "Login failed");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn login_401_is_not_a_session_signal() {
    let err = ApiError::from_status(401, r#"{"error": "Invalid credentials"}"#, "Login failed");
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn network_error_shows_generic_retry_message() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}
