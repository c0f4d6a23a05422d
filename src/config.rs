//! Client configuration constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is served from the same origin as the REST backend, so every
//! value here is fixed at compile time rather than read from the environment.

/// Prefix prepended to every `/api/...` path. Empty means same origin.
pub const API_BASE: &str = "";

/// Route of the sign-in surface; unauthorized responses land here.
pub const SIGN_IN_PATH: &str = "/auth";

/// Route of the authenticated dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// `localStorage` key holding the `"light"`/`"dark"` preference.
pub const THEME_STORAGE_KEY: &str = "greentrack-theme";

/// Quiet period before search-as-you-type reloads available tasks.
pub const SEARCH_DEBOUNCE_MS: u64 = 400;

/// Lifetime of a success alert before it clears itself.
pub const SUCCESS_ALERT_MS: u64 = 4000;

/// Delay between a successful login message and the dashboard redirect.
pub const LOGIN_REDIRECT_DELAY_MS: u64 = 800;

/// Note attached to every proof-of-completion upload.
pub const COMPLETION_NOTE: &str = "Cleanup proof uploaded via dashboard.";

/// Report categories offered by the submission form, as `(value, label)`.
pub const REPORT_CATEGORIES: &[(&str, &str)] = &[
    ("garbage_dump", "Garbage dump"),
    ("overflowing_bin", "Overflowing bin"),
    ("litter", "Street litter"),
    ("plastic_waste", "Plastic waste"),
    ("sewage", "Open sewage"),
    ("other", "Other"),
];

/// Severities offered by the submission form, as `(value, label)`.
pub const REPORT_SEVERITIES: &[(&str, &str)] = &[("low", "Low"), ("medium", "Medium"), ("high", "High")];

/// Task statuses accepted by the manage-tasks filter, as `(value, label)`.
pub const TASK_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("assigned", "Assigned"),
    ("in_progress", "In progress"),
    ("completed", "Completed"),
];

/// Build an absolute API URL from an `/api/...` path.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}
