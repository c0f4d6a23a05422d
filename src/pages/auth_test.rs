use futures::executor::block_on;

use super::*;
use crate::net::api::{AuthApi, LOGIN_FAILED_MESSAGE, REGISTER_FAILED_MESSAGE};
use crate::state::auth::AuthAlert;

/// Credential endpoint double that answers with canned HTTP outcomes.
struct CannedAuth {
    status: u16,
    body: &'static str,
}

impl AuthApi for CannedAuth {
    async fn login(&self, _body: &LoginRequest) -> Result<User, ApiError> {
        if self.status == 200 {
            return Ok(User { id: 2, name: "Ravi".to_owned(), email: "ravi@example.org".to_owned(), role: Role::Volunteer });
        }
        Err(ApiError::from_status(self.status, self.body, LOGIN_FAILED_MESSAGE))
    }

    async fn register(&self, _body: &RegisterRequest) -> Result<(), ApiError> {
        if self.status == 201 {
            return Ok(());
        }
        Err(ApiError::from_status(self.status, self.body, REGISTER_FAILED_MESSAGE))
    }
}

fn login_body() -> LoginRequest {
    LoginRequest { email: "ravi@example.org".to_owned(), password: "secret".to_owned() }
}

fn register_body() -> RegisterRequest {
    RegisterRequest {
        name: "Ravi".to_owned(),
        email: "ravi@example.org".to_owned(),
        password: "secret".to_owned(),
        role: Role::Volunteer,
    }
}

fn error(message: &str) -> Option<AuthAlert> {
    Some(AuthAlert { kind: AuthAlertKind::Error, message: message.to_owned() })
}

#[test]
fn second_submit_is_ignored_while_busy() {
    let mut state = AuthState::default();
    assert!(begin_submit(&mut state));
    assert!(!begin_submit(&mut state));
}

#[test]
fn successful_login_shows_message_and_redirects() {
    let mut state = AuthState::default();
    begin_submit(&mut state);
    let result = block_on(CannedAuth { status: 200, body: "" }.login(&login_body()));
    assert!(finish_login(&mut state, result));
    assert_eq!(state.alert, Some(AuthAlert { kind: AuthAlertKind::Success, message: LOGIN_SUCCESS_MESSAGE.to_owned() }));
    assert!(!state.busy);
}

#[test]
fn rejected_credentials_show_server_error_without_redirect() {
    let mut state = AuthState::default();
    let result = block_on(CannedAuth { status: 401, body: r#"{"error":"Invalid credentials"}"# }.login(&login_body()));
    assert!(!finish_login(&mut state, result));
    assert_eq!(state.alert, error("Invalid credentials"));
}

#[test]
fn login_failure_without_server_message_uses_fallback() {
    let mut state = AuthState::default();
    let result = block_on(CannedAuth { status: 500, body: "oops" }.login(&login_body()));
    finish_login(&mut state, result);
    assert_eq!(state.alert, error(LOGIN_FAILED_MESSAGE));
}

#[test]
fn network_failure_shows_generic_message() {
    let mut state = AuthState::default();
    finish_login(&mut state, Err(ApiError::Network("connection refused".to_owned())));
    assert_eq!(state.alert, error("Server error. Please try again."));
}

#[test]
fn successful_registration_switches_to_login_and_keeps_message() {
    let mut state = AuthState::from_query(Some("register"), Some("volunteer"));
    let result = block_on(CannedAuth { status: 201, body: "" }.register(&register_body()));
    finish_register(&mut state, result);
    assert_eq!(state.tab, AuthTab::Login);
    assert_eq!(state.alert, Some(AuthAlert { kind: AuthAlertKind::Success, message: REGISTER_SUCCESS_MESSAGE.to_owned() }));
}

#[test]
fn failed_registration_stays_on_register_form() {
    let mut state = AuthState::from_query(Some("register"), None);
    let result = block_on(CannedAuth { status: 409, body: r#"{"error":"Email already registered"}"# }.register(&register_body()));
    finish_register(&mut state, result);
    assert_eq!(state.tab, AuthTab::Register);
    assert_eq!(state.alert, error("Email already registered"));
}

#[test]
fn registration_failure_without_server_message_uses_fallback() {
    let mut state = AuthState::default();
    let result = block_on(CannedAuth { status: 400, body: "{}" }.register(&register_body()));
    finish_register(&mut state, result);
    assert_eq!(state.alert, error(REGISTER_FAILED_MESSAGE));
}
