//! Shared session-redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every session-scoped call applies the same unauthorized handling: discard
//! the page and go back to the sign-in surface.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::SIGN_IN_PATH;
use crate::net::error::ApiError;

/// What a caller should do with a failed session-scoped call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// Session gone; navigate to sign-in and stop.
    SignIn,
    /// Show this message in the triggering view's alert region.
    Show(String),
}

pub fn classify_failure(err: &ApiError) -> Failure {
    if err.is_unauthorized() {
        Failure::SignIn
    } else {
        Failure::Show(err.user_message())
    }
}

/// Navigate the whole page to `path`.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Leave the current page for the sign-in surface.
pub fn redirect_to_sign_in() {
    leptos::logging::log!("session rejected; redirecting to {SIGN_IN_PATH}");
    navigate_to(SIGN_IN_PATH);
}
