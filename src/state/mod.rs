//! Client-side state containers used by Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain values wrapped in `RwSignal` at the component layer,
//! so every transition can be unit tested without a browser.

pub mod access;
pub mod auth;
pub mod dashboard;
pub mod sequence;
pub mod ui;
