//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose reusable components and own route-specific state: the auth
//! page its form state, the dashboard page the `RwSignal<DashboardState>` it
//! provides to every panel below it.

pub mod auth;
pub mod dashboard;
pub mod landing;
