//! Pure markup renderers for dashboard containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each renderer maps a data snapshot to an HTML string that a component
//! assigns to a fixed container via `inner_html`. Renderers never touch the
//! network and are safe to re-run on every state change. All interpolated
//! user text goes through [`escape::escape_html`].

pub mod analytics;
pub mod escape;
pub mod reports;
pub mod rewards;
pub mod tasks;
pub mod volunteers;
