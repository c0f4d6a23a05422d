//! Sign-in and registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unlike dashboard calls, a 401 here means bad credentials and is shown as
//! an ordinary error. A successful login waits briefly so the success line is
//! readable, then leaves for the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::theme_toggle::ThemeToggle;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, Role, User};
use crate::state::auth::{AuthAlertKind, AuthState, AuthTab};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! You can now sign in.";

/// Mark a submission in flight. Returns `false` while one is already running.
pub fn begin_submit(state: &mut AuthState) -> bool {
    if state.busy {
        return false;
    }
    state.busy = true;
    true
}

/// Apply a login result. Returns `true` when the page should redirect.
pub fn finish_login(state: &mut AuthState, result: Result<User, ApiError>) -> bool {
    state.busy = false;
    match result {
        Ok(_) => {
            state.show_success(LOGIN_SUCCESS_MESSAGE);
            true
        }
        Err(err) => {
            state.show_error(err.user_message());
            false
        }
    }
}

/// Apply a registration result; success moves to the login form.
pub fn finish_register(state: &mut AuthState, result: Result<(), ApiError>) {
    state.busy = false;
    match result {
        Ok(()) => {
            state.switch_tab(AuthTab::Login);
            state.show_success(REGISTER_SUCCESS_MESSAGE);
        }
        Err(err) => state.show_error(err.user_message()),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|q| AuthState::from_query(q.get("action").as_deref(), q.get("role").as_deref()));
    let state = RwSignal::new(initial);

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let register_name = RwSignal::new(String::new());
    let register_email = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(begin_submit).unwrap_or(false) {
            return;
        }
        let body = LoginRequest { email: login_email.get_untracked(), password: login_password.get_untracked() };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{AuthApi, HttpApi};

            let result = HttpApi.login(&body).await;
            if let Err(err) = &result {
                leptos::logging::warn!("login failed: {err}");
            }
            if state.try_update(|s| finish_login(s, result)).unwrap_or(false) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::LOGIN_REDIRECT_DELAY_MS))
                    .await;
                crate::util::auth::navigate_to(crate::config::DASHBOARD_PATH);
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = body;
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(begin_submit).unwrap_or(false) {
            return;
        }
        let body = RegisterRequest {
            name: register_name.get_untracked(),
            email: register_email.get_untracked(),
            password: register_password.get_untracked(),
            role: state.with_untracked(|s| s.register_role),
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{AuthApi, HttpApi};

            let result = HttpApi.register(&body).await;
            if result.is_ok() {
                login_email.set(body.email.clone());
            }
            state.update(|s| finish_register(s, result));
        });
        #[cfg(not(feature = "csr"))]
        let _ = body;
    };

    let tab_button = move |tab: AuthTab, label: &'static str| {
        view! {
            <button
                type="button"
                class="tab-button"
                class:active=move || state.with(|s| s.tab == tab)
                on:click=move |_| state.update(|s| s.switch_tab(tab))
            >
                {label}
            </button>
        }
    };

    let busy = move || state.with(|s| s.busy);

    view! {
        <div class="auth-page">
            <header class="site-header">
                <a href="/" class="brand">
                    <i class="fa fa-leaf"></i>
                    " GreenTrack"
                </a>
                <ThemeToggle/>
            </header>

            <div class="auth-card card">
                <div class="tabs">
                    {tab_button(AuthTab::Login, "Login")}
                    {tab_button(AuthTab::Register, "Register")}
                </div>

                <div id="auth-alert">
                    {move || {
                        state
                            .with(|s| s.alert.clone())
                            .map(|alert| {
                                let class = match alert.kind {
                                    AuthAlertKind::Success => "alert alert-success",
                                    AuthAlertKind::Error => "alert alert-error",
                                };
                                view! { <div class=class>{alert.message}</div> }
                            })
                    }}
                </div>

                <Show when=move || state.with(|s| s.tab == AuthTab::Login)>
                    <form id="login-form" class="form-grid" on:submit=on_login>
                        <input
                            class="form-control"
                            type="email"
                            required
                            placeholder="Email"
                            prop:value=move || login_email.get()
                            on:input=move |ev| login_email.set(event_target_value(&ev))
                        />
                        <input
                            class="form-control"
                            type="password"
                            required
                            placeholder="Password"
                            prop:value=move || login_password.get()
                            on:input=move |ev| login_password.set(event_target_value(&ev))
                        />
                        <button class="btn btn-primary" type="submit" disabled=busy>
                            "Sign In"
                        </button>
                    </form>
                </Show>

                <Show when=move || state.with(|s| s.tab == AuthTab::Register)>
                    <form id="register-form" class="form-grid" on:submit=on_register>
                        <input
                            class="form-control"
                            type="text"
                            required
                            placeholder="Full name"
                            prop:value=move || register_name.get()
                            on:input=move |ev| register_name.set(event_target_value(&ev))
                        />
                        <input
                            class="form-control"
                            type="email"
                            required
                            placeholder="Email"
                            prop:value=move || register_email.get()
                            on:input=move |ev| register_email.set(event_target_value(&ev))
                        />
                        <input
                            class="form-control"
                            type="password"
                            required
                            placeholder="Password"
                            prop:value=move || register_password.get()
                            on:input=move |ev| register_password.set(event_target_value(&ev))
                        />
                        <select
                            class="form-control"
                            prop:value=move || state.with(|s| s.register_role.as_str())
                            on:change=move |ev| {
                                let role = Role::from(event_target_value(&ev));
                                state.update(|s| s.register_role = role);
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                                .collect_view()}
                        </select>
                        <button class="btn btn-primary" type="submit" disabled=busy>
                            "Create Account"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
