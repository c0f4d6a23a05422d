//! Reusable UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context (`RwSignal<UiState>` app
//! wide, `RwSignal<DashboardState>` under the dashboard route) and forward
//! user intent to `controller::runtime`.

pub mod alert_banner;
pub mod assign_form;
pub mod markup_panel;
pub mod proof_picker;
pub mod report_form;
pub mod tab_bar;
pub mod task_filter_form;
pub mod theme_toggle;
