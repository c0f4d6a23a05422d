//! Sign-in page state: active form, alert line, and in-flight flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and register forms are mutually exclusive; switching tabs always
//! clears the previous alert.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;

/// Which credential form is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    /// Tab implied by the `?action=` query parameter.
    pub fn from_query(action: Option<&str>) -> Self {
        match action {
            Some("register") => Self::Register,
            _ => Self::Login,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAlertKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthAlert {
    pub kind: AuthAlertKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub tab: AuthTab,
    pub alert: Option<AuthAlert>,
    pub busy: bool,
    /// Role pre-selected in the register form.
    pub register_role: Role,
}

impl AuthState {
    /// Initial state from `?action=register&role=...`. An unknown role leaves
    /// the default in place.
    pub fn from_query(action: Option<&str>, role: Option<&str>) -> Self {
        let tab = AuthTab::from_query(action);
        let register_role = match tab {
            AuthTab::Register => role.and_then(Role::parse).unwrap_or_default(),
            AuthTab::Login => Role::default(),
        };
        Self { tab, register_role, ..Self::default() }
    }

    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.alert = None;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.alert = Some(AuthAlert { kind: AuthAlertKind::Error, message: message.into() });
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.alert = Some(AuthAlert { kind: AuthAlertKind::Success, message: message.into() });
    }
}
