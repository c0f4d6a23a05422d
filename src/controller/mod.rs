//! Dashboard controller: actions, loads, click delegation, and the glue that
//! runs them against the live session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `actions`, `loaders`, and `delegate` are pure or generic over
//! [`crate::net::api::DashboardApi`], so whole flows are tested against an
//! in-memory API. `runtime` binds them to `RwSignal<DashboardState>` and
//! `HttpApi`.

pub mod actions;
pub mod delegate;
pub mod loaders;
pub mod runtime;

#[cfg(test)]
mod mock_api;
